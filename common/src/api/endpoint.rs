use std::fmt;

use crate::model::community::PostId;
use crate::model::opportunity::OpportunityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every route the client calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListOpportunities,
    CreateOpportunity,
    Apply(OpportunityId),
    Withdraw(OpportunityId),
    Leaderboard,
    Login,
    LoginOrganization,
    Register,
    RegisterOrganization,
    Profile,
    UpdateProfile,
    Logout,
    OrganizationProfile,
    UpdateOrganizationProfile,
    RecommendedVolunteers,
    CommunityPosts,
    CreateCommunityPost,
    LikePost(PostId),
    PostComments(PostId),
    CreateComment(PostId),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListOpportunities
            | Endpoint::Leaderboard
            | Endpoint::Profile
            | Endpoint::OrganizationProfile
            | Endpoint::RecommendedVolunteers
            | Endpoint::CommunityPosts
            | Endpoint::PostComments(_) => Method::Get,
            Endpoint::UpdateProfile | Endpoint::UpdateOrganizationProfile => Method::Patch,
            Endpoint::CreateOpportunity
            | Endpoint::Apply(_)
            | Endpoint::Withdraw(_)
            | Endpoint::Login
            | Endpoint::LoginOrganization
            | Endpoint::Register
            | Endpoint::RegisterOrganization
            | Endpoint::Logout
            | Endpoint::CreateCommunityPost
            | Endpoint::LikePost(_)
            | Endpoint::CreateComment(_) => Method::Post,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::ListOpportunities | Endpoint::CreateOpportunity => {
                "/api/opportunities/".to_string()
            }
            Endpoint::Apply(id) => format!("/api/opportunities/{id}/apply/"),
            Endpoint::Withdraw(id) => format!("/api/opportunities/{id}/withdraw/"),
            Endpoint::Leaderboard => "/api/leaderboard/".to_string(),
            Endpoint::Login => "/api/login/".to_string(),
            Endpoint::LoginOrganization => "/api/login/organization/".to_string(),
            Endpoint::Register => "/api/register/".to_string(),
            Endpoint::RegisterOrganization => "/api/register/organization/".to_string(),
            Endpoint::Profile | Endpoint::UpdateProfile => "/api/profile/".to_string(),
            Endpoint::Logout => "/api/logout/".to_string(),
            Endpoint::OrganizationProfile | Endpoint::UpdateOrganizationProfile => {
                "/api/organization/profile/".to_string()
            }
            Endpoint::RecommendedVolunteers => "/api/recommendations/volunteers/".to_string(),
            Endpoint::CommunityPosts | Endpoint::CreateCommunityPost => {
                "/api/community/posts/".to_string()
            }
            Endpoint::LikePost(id) => format!("/api/community/posts/{id}/like/"),
            Endpoint::PostComments(id) | Endpoint::CreateComment(id) => {
                format!("/api/community/posts/{id}/comments/")
            }
        }
    }

    /// Whether the bearer credential is sent. The leaderboard is public and the
    /// login/registration routes are what produce a credential in the first place.
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Endpoint::Leaderboard
                | Endpoint::Login
                | Endpoint::LoginOrganization
                | Endpoint::Register
                | Endpoint::RegisterOrganization
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opportunity_routes() {
        assert_eq!(Endpoint::Apply(12).path(), "/api/opportunities/12/apply/");
        assert_eq!(Endpoint::Withdraw(12).path(), "/api/opportunities/12/withdraw/");
        assert_eq!(Endpoint::Apply(12).method(), Method::Post);
        assert_eq!(Endpoint::ListOpportunities.method(), Method::Get);
        assert_eq!(Endpoint::CreateOpportunity.method(), Method::Post);
        assert!(Endpoint::Withdraw(1).requires_auth());
    }

    #[test]
    fn public_routes_skip_auth() {
        for endpoint in [
            Endpoint::Leaderboard,
            Endpoint::Login,
            Endpoint::LoginOrganization,
            Endpoint::Register,
            Endpoint::RegisterOrganization,
        ] {
            assert!(!endpoint.requires_auth(), "{endpoint:?} should be public");
        }
        assert!(Endpoint::Logout.requires_auth());
        assert!(Endpoint::Profile.requires_auth());
    }

    #[test]
    fn profile_read_and_update_share_a_path() {
        assert_eq!(Endpoint::Profile.path(), Endpoint::UpdateProfile.path());
        assert_eq!(Endpoint::UpdateProfile.method(), Method::Patch);
        assert_eq!(
            Endpoint::CreateComment(3).path(),
            "/api/community/posts/3/comments/"
        );
    }
}
