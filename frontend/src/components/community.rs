//! Community feed page. All feed state lives in `CommunityFeed`; this
//! component runs the requests and feeds the answers back in.

use common::community::{failure_notice, CommunityFeed, ALL_CATEGORIES, CATEGORIES};
use common::error::ApiError;
use common::model::community::{Comment, CommunityPost, LikeResponse, NewPost, PostId};
use common::model::split_list;
use common::notice::Notice;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::context::ClientHandle;
use crate::helpers::{input_value, show_notice, textarea_value};
use crate::sheet::TopSheet;

#[derive(Properties, PartialEq)]
pub struct CommunityProps {
    pub client: ClientHandle,
    pub on_auth_lost: Callback<()>,
}

#[derive(Clone, Copy)]
pub enum PostField {
    Title,
    Content,
    Category,
    Tags,
}

pub enum Msg {
    Load,
    Loaded(Result<Vec<CommunityPost>, ApiError>),
    SetCategory(String),
    Like(PostId),
    Liked(PostId, Result<LikeResponse, ApiError>),
    ToggleComments(PostId),
    CommentsLoaded(PostId, Result<Vec<Comment>, ApiError>),
    SetDraft(PostId, String),
    SubmitComment(PostId),
    CommentPosted(PostId, Result<Comment, ApiError>),
    OpenCreate,
    CloseCreate,
    SetPostField(PostField, String),
    SubmitPost,
    PostCreated(Result<CommunityPost, ApiError>),
}

struct PostForm {
    title: String,
    content: String,
    category: String,
    tags: String,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: CATEGORIES[2].to_string(),
            tags: String::new(),
        }
    }
}

pub struct CommunityPage {
    feed: CommunityFeed,
    form: PostForm,
    create_open: bool,
}

impl CommunityPage {
    fn fail(ctx: &Context<Self>, err: &ApiError, action: &str) {
        show_notice(&failure_notice(action, err));
        if err.requires_login() {
            ctx.props().on_auth_lost.emit(());
        }
    }

    fn fetch_comments(ctx: &Context<Self>, id: PostId) {
        let client = ctx.props().client.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = client.post_comments(id).await;
            link.send_message(Msg::CommentsLoaded(id, result));
        });
    }

    fn post_card(&self, post: &CommunityPost, link: &Scope<Self>) -> Html {
        let id = post.id;
        let expanded = self.feed.expanded() == Some(id);
        html! {
            <article key={id.to_string()} style="padding:16px;border:1px solid #e5e7eb;border-radius:12px;margin-bottom:16px;">
                <h3 style="margin-top:0;">{ post.title.clone() }</h3>
                <p style="color:#6b7280;">
                    { format!("{} · {} · {}", post.author.name, post.category, post.created_at) }
                </p>
                <p>{ post.content.clone() }</p>
                if !post.tags.is_empty() {
                    <p>{ post.tags.iter().map(|tag| format!("#{tag}")).collect::<Vec<_>>().join(" ") }</p>
                }
                <div style="display:flex;gap:12px;">
                    <button onclick={link.callback(move |_| Msg::Like(id))}>
                        { format!("♥ {}", post.likes) }
                    </button>
                    <button onclick={link.callback(move |_| Msg::ToggleComments(id))}>
                        { format!("{} comments", post.comments) }
                    </button>
                </div>
                if expanded {
                    { self.comments(id, link) }
                }
            </article>
        }
    }

    fn comments(&self, id: PostId, link: &Scope<Self>) -> Html {
        html! {
            <div style="margin-top:12px;padding-left:16px;border-left:2px solid #e5e7eb;">
                { for self.feed.comments(id).iter().map(|comment| html! {
                    <p key={comment.id.to_string()}>
                        <strong>{ comment.author.name.clone() }</strong>
                        { format!(": {}", comment.content) }
                    </p>
                }) }
                <form onsubmit={link.callback(move |e: SubmitEvent| { e.prevent_default(); Msg::SubmitComment(id) })}>
                    <input
                        type="text"
                        placeholder="Write a comment"
                        value={self.feed.draft(id).to_string()}
                        oninput={link.callback(move |e| Msg::SetDraft(id, input_value(e)))}
                    />
                    <button type="submit">{ "Comment" }</button>
                </form>
            </div>
        }
    }

    fn create_form(&self, link: &Scope<Self>) -> Html {
        let form = &self.form;
        html! {
            <form onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::SubmitPost })}>
                <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                    { "Title" }
                    <input
                        type="text"
                        value={form.title.clone()}
                        oninput={link.callback(|e| Msg::SetPostField(PostField::Title, input_value(e)))}
                    />
                </label>
                <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                    { "Content" }
                    <textarea
                        rows="5"
                        value={form.content.clone()}
                        oninput={link.callback(|e| Msg::SetPostField(PostField::Content, textarea_value(e)))}
                    />
                </label>
                <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                    { "Category" }
                    <select onchange={link.callback(|e: Event| {
                        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                        Msg::SetPostField(PostField::Category, select.value())
                    })}>
                        { for CATEGORIES.into_iter().filter(|c| *c != ALL_CATEGORIES).map(|category| html! {
                            <option value={category} selected={form.category == category}>{ category }</option>
                        }) }
                    </select>
                </label>
                <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                    { "Tags (comma separated)" }
                    <input
                        type="text"
                        value={form.tags.clone()}
                        oninput={link.callback(|e| Msg::SetPostField(PostField::Tags, input_value(e)))}
                    />
                </label>
                <button type="submit">{ "Publish" }</button>
            </form>
        }
    }
}

impl Component for CommunityPage {
    type Message = Msg;
    type Properties = CommunityProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            feed: CommunityFeed::new(),
            form: PostForm::default(),
            create_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let client = ctx.props().client.clone();
        let link = ctx.link().clone();
        match msg {
            Msg::Load => {
                spawn_local(async move {
                    link.send_message(Msg::Loaded(client.community_posts().await));
                });
                false
            }
            Msg::Loaded(Ok(posts)) => {
                self.feed.replace_posts(posts);
                true
            }
            Msg::Loaded(Err(err)) => {
                Self::fail(ctx, &err, "load posts");
                false
            }
            Msg::SetCategory(category) => {
                self.feed.set_category(category);
                true
            }
            Msg::Like(id) => {
                spawn_local(async move {
                    link.send_message(Msg::Liked(id, client.like_post(id).await));
                });
                false
            }
            Msg::Liked(id, Ok(response)) => {
                self.feed.apply_like(id, &response);
                true
            }
            Msg::Liked(_, Err(err)) => {
                Self::fail(ctx, &err, "like post");
                false
            }
            Msg::ToggleComments(id) => {
                if let Some(fetch) = self.feed.toggle_comments(id) {
                    Self::fetch_comments(ctx, fetch);
                }
                true
            }
            Msg::CommentsLoaded(id, Ok(comments)) => {
                self.feed.store_comments(id, comments);
                true
            }
            Msg::CommentsLoaded(_, Err(err)) => {
                Self::fail(ctx, &err, "load comments");
                false
            }
            Msg::SetDraft(id, content) => {
                self.feed.set_draft(id, content);
                true
            }
            Msg::SubmitComment(id) => {
                let Some(content) = self.feed.pending_comment(id) else {
                    return false;
                };
                spawn_local(async move {
                    let result = client.create_comment(id, &content).await;
                    link.send_message(Msg::CommentPosted(id, result));
                });
                false
            }
            Msg::CommentPosted(id, Ok(_)) => {
                ctx.link().send_message(Msg::Load);
                if let Some(refetch) = self.feed.comment_posted(id) {
                    Self::fetch_comments(ctx, refetch);
                }
                true
            }
            Msg::CommentPosted(_, Err(err)) => {
                Self::fail(ctx, &err, "post comment");
                false
            }
            Msg::OpenCreate => {
                self.create_open = true;
                true
            }
            Msg::CloseCreate => {
                self.create_open = false;
                true
            }
            Msg::SetPostField(field, value) => {
                match field {
                    PostField::Title => self.form.title = value,
                    PostField::Content => self.form.content = value,
                    PostField::Category => self.form.category = value,
                    PostField::Tags => self.form.tags = value,
                }
                true
            }
            Msg::SubmitPost => {
                if self.form.title.trim().is_empty() || self.form.content.trim().is_empty() {
                    show_notice(&Notice::error("Title and content are required"));
                    return false;
                }
                let post = NewPost {
                    title: self.form.title.trim().to_string(),
                    content: self.form.content.trim().to_string(),
                    category: self.form.category.clone(),
                    tags: split_list(&self.form.tags),
                };
                spawn_local(async move {
                    link.send_message(Msg::PostCreated(client.create_post(&post).await));
                });
                false
            }
            Msg::PostCreated(Ok(_)) => {
                self.create_open = false;
                self.form = PostForm::default();
                show_notice(&Notice::success("Post published"));
                ctx.link().send_message(Msg::Load);
                true
            }
            Msg::PostCreated(Err(err)) => {
                Self::fail(ctx, &err, "create post");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let posts = self.feed.visible_posts();

        html! {
            <section class="community">
                <div style="display:flex;justify-content:space-between;align-items:center;">
                    <h1>{ "Community" }</h1>
                    <button onclick={link.callback(|_| Msg::OpenCreate)}>{ "New post" }</button>
                </div>
                <div style="display:flex;gap:8px;margin-bottom:16px;">
                    { for CATEGORIES.into_iter().map(|category| {
                        let active = self.feed.category() == category;
                        let style = if active { "font-weight:700;" } else { "" };
                        html! {
                            <button {style} onclick={link.callback(move |_| Msg::SetCategory(category.to_string()))}>
                                { category.replace('-', " ") }
                            </button>
                        }
                    }) }
                </div>
                if posts.is_empty() {
                    <p>{ "No posts in this category yet." }</p>
                } else {
                    { for posts.into_iter().map(|post| self.post_card(post, link)) }
                }
                <TopSheet
                    open={self.create_open}
                    title="New post"
                    on_close={link.callback(|_| Msg::CloseCreate)}
                >
                    { self.create_form(link) }
                </TopSheet>
            </section>
        }
    }
}
