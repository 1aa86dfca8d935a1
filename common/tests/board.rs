//! Opportunity board driven through the real client and a recording transport.

mod support;

use common::board::{ApplicationState, OpportunityBoard};
use common::filter::FilterCriteria;
use common::notice::Notice;
use common::session::Role;

use support::{list_json, opportunity_json, signed_in};

#[tokio::test]
async fn full_opportunity_never_hits_the_network() {
    let client = signed_in(Role::Volunteer);
    client
        .transport()
        .respond(200, &list_json(&[opportunity_json(1, 2, 2, false)]));

    let mut board = OpportunityBoard::new();
    board.load_opportunities(&client).await;
    let before = client.transport().request_count();

    let notices = board.toggle_application(&client, 1).await;

    assert_eq!(board.state(1), ApplicationState::NotApplied);
    assert_eq!(client.transport().request_count(), before);
    assert_eq!(notices, vec![Notice::error("This opportunity is full")]);
}

#[tokio::test]
async fn single_apply_moves_to_applied_and_reloads() {
    let client = signed_in(Role::Volunteer);
    client
        .transport()
        .respond(200, &list_json(&[opportunity_json(2, 5, 1, false)]));
    client.transport().respond(200, "{}");
    client
        .transport()
        .respond(200, &list_json(&[opportunity_json(2, 5, 2, true)]));

    let mut board = OpportunityBoard::new();
    board.load_opportunities(&client).await;
    board.toggle_application(&client, 2).await;

    assert_eq!(board.state(2), ApplicationState::Applied);
    assert_eq!(board.get(2).map(|o| o.volunteers_registered), Some(2));
    assert_eq!(
        client.transport().request_lines(),
        vec![
            "GET /api/opportunities/",
            "POST /api/opportunities/2/apply/",
            "GET /api/opportunities/",
        ]
    );
}

#[tokio::test]
async fn withdraw_takes_two_toggles() {
    let client = signed_in(Role::Volunteer);
    client
        .transport()
        .respond(200, &list_json(&[opportunity_json(3, 5, 1, true)]));

    let mut board = OpportunityBoard::new();
    board.load_opportunities(&client).await;

    board.toggle_application(&client, 3).await;
    assert_eq!(board.state(3), ApplicationState::PendingWithdrawalConfirmation);
    assert_eq!(client.transport().request_count(), 1);

    client.transport().respond(200, "{}");
    client
        .transport()
        .respond(200, &list_json(&[opportunity_json(3, 5, 0, false)]));
    board.toggle_application(&client, 3).await;

    assert_eq!(board.state(3), ApplicationState::NotApplied);
    assert_eq!(
        client.transport().request_lines()[1],
        "POST /api/opportunities/3/withdraw/"
    );
}

#[tokio::test]
async fn expired_session_during_apply() {
    let client = signed_in(Role::Volunteer);
    client
        .transport()
        .respond(200, &list_json(&[opportunity_json(4, 5, 1, false)]));
    client.transport().respond(401, "");

    let mut board = OpportunityBoard::new();
    board.load_opportunities(&client).await;
    let notices = board.toggle_application(&client, 4).await;

    assert_eq!(board.state(4), ApplicationState::NotApplied);
    assert!(notices[0].is_error());
    assert!(client.session().session().is_none());
}

#[tokio::test]
async fn failed_reload_keeps_what_was_shown() {
    let client = signed_in(Role::Volunteer);
    client.transport().respond(
        200,
        &list_json(&[
            opportunity_json(1, 5, 0, false),
            opportunity_json(2, 5, 0, true),
        ]),
    );
    client.transport().fail("offline");

    let mut board = OpportunityBoard::new();
    assert!(board.load_opportunities(&client).await.is_none());
    let notice = board.load_opportunities(&client).await;

    assert_eq!(notice, Some(Notice::error("Failed to load opportunities")));
    assert_eq!(board.opportunities().len(), 2);
    assert_eq!(board.state(2), ApplicationState::Applied);
    assert_eq!(board.apply_filter(&FilterCriteria::default()).len(), 2);
}
