//! Typed client for the volunteer platform API.
//!
//! Every call goes through [`ApiClient::send`], which
//! - attaches the default headers and, for authenticated routes, the bearer token;
//! - clears the session on a 401 from an authenticated route;
//! - maps non-2xx answers to [`ApiError::Rejected`] with the body untouched;
//!   [`ApiError::user_message`] decides whether the body is fit to show.
//!
//! Nothing is retried. A failed call is reported once and the user re-triggers it.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::endpoint::Endpoint;
use super::transport::{ApiRequest, Transport};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::auth::{
    Credentials, LoginResponse, LogoutBody, OrganizationRegistration, OrganizationSignupBody,
    RegisterResponse, VolunteerRegistration,
};
use crate::model::community::{
    Comment, CommunityPost, LikeResponse, NewCommentBody, NewPost, PostId,
};
use crate::model::leaderboard::{LeaderboardEntry, rank_entries};
use crate::model::opportunity::{CreateOpportunityBody, NewOpportunity, Opportunity, OpportunityId};
use crate::model::organization::{
    OrganizationProfile, OrganizationProfileUpdate, RecommendationsEnvelope, RecommendedVolunteer,
};
use crate::model::profile::{Profile, ProfileUpdate};
use crate::session::{Role, Session, SessionContext, SessionStore};

pub struct ApiClient<T, S> {
    config: ApiConfig,
    transport: T,
    session: SessionContext<S>,
}

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub fn new(config: ApiConfig, transport: T, store: S) -> Self {
        Self {
            config,
            transport,
            session: SessionContext::new(store),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionContext<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn build_request(&self, endpoint: Endpoint, body: Option<String>) -> ApiRequest {
        let mut headers = self.config.default_headers.clone();
        if endpoint.requires_auth() {
            if let Some(token) = self.session.access_token() {
                headers.push(("Authorization".to_string(), format!("Bearer {token}")));
            }
        }
        ApiRequest {
            method: endpoint.method(),
            url: self.config.url(&endpoint.path()),
            headers,
            body,
        }
    }

    /// Sends one request and returns the raw body of a 2xx answer.
    async fn send(&self, endpoint: Endpoint, body: Option<String>) -> Result<String, ApiError> {
        let request = self.build_request(endpoint, body);
        log::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await.inspect_err(|err| {
            log::warn!("{} {} failed: {err}", endpoint.method(), endpoint.path());
        })?;

        if response.is_success() {
            return Ok(response.body);
        }

        log::warn!(
            "{} {} answered {}",
            endpoint.method(),
            endpoint.path(),
            response.status
        );
        if response.status == 401 && endpoint.requires_auth() {
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }
        Err(ApiError::Rejected {
            status: response.status,
            body: response.body,
        })
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let text = self.send(endpoint, body).await?;
        decode(&text)
    }

    // --- opportunities -------------------------------------------------------

    pub async fn list_opportunities(&self) -> Result<Vec<Opportunity>, ApiError> {
        self.fetch(Endpoint::ListOpportunities, None).await
    }

    pub async fn create_opportunity(
        &self,
        opportunity: &NewOpportunity,
    ) -> Result<Opportunity, ApiError> {
        let body = encode(&CreateOpportunityBody {
            opportunity,
            volunteers_registered: 0,
        })?;
        self.fetch(Endpoint::CreateOpportunity, Some(body)).await
    }

    pub async fn apply(&self, id: OpportunityId) -> Result<(), ApiError> {
        self.send(Endpoint::Apply(id), None).await.map(|_| ())
    }

    pub async fn withdraw(&self, id: OpportunityId) -> Result<(), ApiError> {
        self.send(Endpoint::Withdraw(id), None).await.map(|_| ())
    }

    // --- auth ----------------------------------------------------------------

    /// Volunteer login. Accounts of any other type are refused and nothing is stored.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .fetch(Endpoint::Login, Some(encode(credentials)?))
            .await?;

        if response.user_type.as_deref() != Some(Role::Volunteer.as_str()) {
            return Err(ApiError::WrongRole(
                "This account is not registered as a volunteer".to_string(),
            ));
        }

        self.session.set_session(Some(Session::new(
            response.access.clone(),
            response.refresh.clone(),
            Role::Volunteer,
        )));
        Ok(response)
    }

    pub async fn login_organization(
        &self,
        credentials: &Credentials,
    ) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .fetch(Endpoint::LoginOrganization, Some(encode(credentials)?))
            .await?;

        self.session.set_session(Some(Session::new(
            response.access.clone(),
            response.refresh.clone(),
            Role::Organization,
        )));
        Ok(response)
    }

    pub async fn register(
        &self,
        registration: &VolunteerRegistration,
    ) -> Result<RegisterResponse, ApiError> {
        let response: RegisterResponse = self
            .fetch(Endpoint::Register, Some(encode(registration)?))
            .await?;

        self.session.set_session(Some(Session::new(
            response.token.clone(),
            response.refresh.clone(),
            Role::Volunteer,
        )));
        Ok(response)
    }

    pub async fn register_organization(
        &self,
        registration: &OrganizationRegistration,
    ) -> Result<RegisterResponse, ApiError> {
        let body = encode(&OrganizationSignupBody {
            registration,
            username: &registration.email,
        })?;
        let response: RegisterResponse =
            self.fetch(Endpoint::RegisterOrganization, Some(body)).await?;

        self.session.set_session(Some(Session::new(
            response.token.clone(),
            response.refresh.clone(),
            Role::Organization,
        )));
        Ok(response)
    }

    /// Revokes the refresh token when one is held, then clears the session
    /// whatever the server said.
    pub async fn logout(&self) {
        if let Some(refresh) = self.session.refresh_token() {
            let result = match encode(&LogoutBody { refresh: &refresh }) {
                Ok(body) => self.send(Endpoint::Logout, Some(body)).await.map(|_| ()),
                Err(err) => Err(err),
            };
            if let Err(err) = result {
                log::warn!("logout request failed, clearing session anyway: {err}");
            }
        }
        self.session.clear();
    }

    // --- profiles ------------------------------------------------------------

    /// Fails with [`ApiError::NotAuthenticated`] without a request when no
    /// credential is stored.
    pub async fn profile(&self) -> Result<Profile, ApiError> {
        if !self.session.is_authenticated() {
            return Err(ApiError::NotAuthenticated);
        }
        self.fetch(Endpoint::Profile, None).await
    }

    /// Patches the profile and reads it back.
    ///
    /// Once the patch has landed the call counts as a success: a failed
    /// re-read yields `Ok(None)` so the caller does not resend the write.
    /// Only a lost session is still reported as an error.
    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<Option<Profile>, ApiError> {
        self.send(Endpoint::UpdateProfile, Some(encode(update)?))
            .await?;
        match self.profile().await {
            Ok(profile) => Ok(Some(profile)),
            Err(err) if err.requires_login() => Err(err),
            Err(err) => {
                log::warn!("profile saved but re-read failed: {err}");
                Ok(None)
            }
        }
    }

    pub async fn organization_profile(&self) -> Result<OrganizationProfile, ApiError> {
        self.fetch(Endpoint::OrganizationProfile, None).await
    }

    pub async fn update_organization_profile(
        &self,
        update: &OrganizationProfileUpdate,
    ) -> Result<OrganizationProfile, ApiError> {
        self.fetch(Endpoint::UpdateOrganizationProfile, Some(encode(update)?))
            .await
    }

    /// Suggestions are best effort: failures and "nothing to suggest"
    /// answers both come back as an empty list.
    pub async fn recommended_volunteers(&self) -> Vec<RecommendedVolunteer> {
        match self
            .fetch::<RecommendationsEnvelope>(Endpoint::RecommendedVolunteers, None)
            .await
        {
            Ok(envelope) => envelope.volunteers.unwrap_or_default(),
            Err(err) => {
                log::warn!("recommended volunteers unavailable: {err}");
                Vec::new()
            }
        }
    }

    // --- leaderboard ---------------------------------------------------------

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let entries = self.fetch(Endpoint::Leaderboard, None).await?;
        Ok(rank_entries(entries))
    }

    // --- community -----------------------------------------------------------

    pub async fn community_posts(&self) -> Result<Vec<CommunityPost>, ApiError> {
        self.fetch(Endpoint::CommunityPosts, None).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<CommunityPost, ApiError> {
        self.fetch(Endpoint::CreateCommunityPost, Some(encode(post)?))
            .await
    }

    pub async fn like_post(&self, id: PostId) -> Result<LikeResponse, ApiError> {
        self.fetch(Endpoint::LikePost(id), None).await
    }

    pub async fn post_comments(&self, id: PostId) -> Result<Vec<Comment>, ApiError> {
        self.fetch(Endpoint::PostComments(id), None).await
    }

    pub async fn create_comment(&self, id: PostId, content: &str) -> Result<Comment, ApiError> {
        let body = encode(&NewCommentBody { content })?;
        self.fetch(Endpoint::CreateComment(id), Some(body)).await
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|err| ApiError::Encode(err.to_string()))
}

fn decode<R: DeserializeOwned>(text: &str) -> Result<R, ApiError> {
    serde_json::from_str(text).map_err(|err| ApiError::Decode(err.to_string()))
}
