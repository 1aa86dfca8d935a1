//! Registration for both account types. The form shows the fields of the
//! selected role; a successful registration signs the user in.

use std::collections::HashMap;

use common::error::ApiError;
use common::model::auth::{OrganizationRegistration, VolunteerRegistration};
use common::model::split_list;
use common::notice::Notice;
use common::session::Role;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::Page;
use crate::context::ClientHandle;
use crate::helpers::{input_value, show_notice, textarea_value};

#[derive(Properties, PartialEq)]
pub struct SignupProps {
    pub role: Role,
    pub client: ClientHandle,
    pub on_signed_in: Callback<Role>,
    pub on_navigate: Callback<Page>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    FirstName,
    LastName,
    Location,
    Skills,
    Interests,
    Availability,
    Bio,
    Experience,
    Name,
    Description,
    Website,
    Phone,
    Category,
}

const VOLUNTEER_FIELDS: [(Field, &str); 11] = [
    (Field::Username, "Username"),
    (Field::Email, "Email"),
    (Field::Password, "Password"),
    (Field::FirstName, "First name"),
    (Field::LastName, "Last name"),
    (Field::Location, "Location"),
    (Field::Skills, "Skills (comma separated)"),
    (Field::Interests, "Interests (comma separated)"),
    (Field::Availability, "Availability (comma separated)"),
    (Field::Bio, "Bio"),
    (Field::Experience, "Experience"),
];

const ORGANIZATION_FIELDS: [(Field, &str); 10] = [
    (Field::Name, "Organization name"),
    (Field::Email, "Email"),
    (Field::Password, "Password"),
    (Field::FirstName, "Contact first name"),
    (Field::LastName, "Contact last name"),
    (Field::Description, "Description"),
    (Field::Location, "Location"),
    (Field::Website, "Website"),
    (Field::Phone, "Phone"),
    (Field::Category, "Category"),
];

pub enum Msg {
    Set(Field, String),
    Submit,
    Done(Result<(), ApiError>),
}

#[derive(Default)]
struct SignupForm {
    values: HashMap<Field, String>,
}

impl SignupForm {
    fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    fn trimmed(&self, field: Field) -> String {
        self.get(field).trim().to_string()
    }

    fn optional(&self, field: Field) -> Option<String> {
        Some(self.trimmed(field)).filter(|value| !value.is_empty())
    }

    fn check_required(&self, fields: &[Field]) -> Result<(), Notice> {
        if fields.iter().any(|field| self.get(*field).trim().is_empty()) {
            return Err(Notice::error("Please fill in all required fields"));
        }
        Ok(())
    }

    fn volunteer(&self) -> Result<VolunteerRegistration, Notice> {
        self.check_required(&[
            Field::Username,
            Field::Email,
            Field::Password,
            Field::FirstName,
            Field::LastName,
        ])?;
        Ok(VolunteerRegistration {
            username: self.trimmed(Field::Username),
            password: self.get(Field::Password).to_string(),
            email: self.trimmed(Field::Email),
            first_name: self.trimmed(Field::FirstName),
            last_name: self.trimmed(Field::LastName),
            location: self.trimmed(Field::Location),
            skills: split_list(self.get(Field::Skills)),
            bio: self.trimmed(Field::Bio),
            interests: split_list(self.get(Field::Interests)),
            availability: split_list(self.get(Field::Availability)),
            experience: self.optional(Field::Experience),
            profile_image: None,
        })
    }

    fn organization(&self) -> Result<OrganizationRegistration, Notice> {
        self.check_required(&[Field::Name, Field::Email, Field::Password])?;
        Ok(OrganizationRegistration {
            email: self.trimmed(Field::Email),
            password: self.get(Field::Password).to_string(),
            first_name: self.trimmed(Field::FirstName),
            last_name: self.trimmed(Field::LastName),
            name: self.trimmed(Field::Name),
            description: self.trimmed(Field::Description),
            location: self.trimmed(Field::Location),
            website: self.optional(Field::Website),
            phone: self.optional(Field::Phone),
            category: self.trimmed(Field::Category),
        })
    }
}

pub struct SignupPage {
    form: SignupForm,
    submitting: bool,
}

impl SignupPage {
    fn input(&self, ctx: &Context<Self>, field: Field, label: &str) -> Html {
        let value = self.form.get(field).to_string();
        let control = match field {
            Field::Bio | Field::Description => html! {
                <textarea
                    rows="3"
                    {value}
                    oninput={ctx.link().callback(move |e| Msg::Set(field, textarea_value(e)))}
                />
            },
            _ => {
                let kind = match field {
                    Field::Password => "password",
                    Field::Email => "email",
                    _ => "text",
                };
                html! {
                    <input
                        type={kind}
                        {value}
                        oninput={ctx.link().callback(move |e| Msg::Set(field, input_value(e)))}
                    />
                }
            }
        };
        html! {
            <label style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
                { label.to_string() }
                { control }
            </label>
        }
    }
}

impl Component for SignupPage {
    type Message = Msg;
    type Properties = SignupProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: SignupForm::default(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(field, value) => {
                self.form.values.insert(field, value);
                true
            }
            Msg::Submit => {
                let client = ctx.props().client.clone();
                let link = ctx.link().clone();
                match ctx.props().role {
                    Role::Volunteer => match self.form.volunteer() {
                        Ok(registration) => spawn_local(async move {
                            let result = client.register(&registration).await.map(|_| ());
                            link.send_message(Msg::Done(result));
                        }),
                        Err(notice) => {
                            show_notice(&notice);
                            return false;
                        }
                    },
                    Role::Organization => match self.form.organization() {
                        Ok(registration) => spawn_local(async move {
                            let result = client.register_organization(&registration).await.map(|_| ());
                            link.send_message(Msg::Done(result));
                        }),
                        Err(notice) => {
                            show_notice(&notice);
                            return false;
                        }
                    },
                }
                self.submitting = true;
                true
            }
            Msg::Done(Ok(())) => {
                self.submitting = false;
                show_notice(&Notice::success("Registration successful!"));
                ctx.props().on_signed_in.emit(ctx.props().role);
                true
            }
            Msg::Done(Err(err)) => {
                self.submitting = false;
                log::warn!("registration failed: {err}");
                show_notice(&Notice::error(err.user_message()));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let role = props.role;
        let (title, fields): (&str, &[(Field, &str)]) = match role {
            Role::Volunteer => ("Join as a volunteer", &VOLUNTEER_FIELDS),
            Role::Organization => ("Register your organization", &ORGANIZATION_FIELDS),
        };

        html! {
            <section style="max-width:520px;margin:0 auto;">
                <h1>{ title }</h1>
                <form onsubmit={ctx.link().callback(|e: SubmitEvent| { e.prevent_default(); Msg::Submit })}>
                    { for fields.iter().map(|(field, label)| self.input(ctx, *field, label)) }
                    <button type="submit" disabled={self.submitting}>
                        { if self.submitting { "Creating account..." } else { "Sign up" } }
                    </button>
                </form>
                <p>
                    <button onclick={props.on_navigate.reform(move |_: MouseEvent| Page::Login(role))}>
                        { "Already have an account? Log in" }
                    </button>
                </p>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(values: &[(Field, &str)]) -> SignupForm {
        SignupForm {
            values: values
                .iter()
                .map(|(field, value)| (*field, value.to_string()))
                .collect(),
        }
    }

    #[test]
    fn volunteer_lists_are_split() {
        let form = form(&[
            (Field::Username, "sam"),
            (Field::Email, " sam@example.org "),
            (Field::Password, "secret"),
            (Field::FirstName, "Sam"),
            (Field::LastName, "Lee"),
            (Field::Skills, "teaching, mentoring"),
            (Field::Availability, "weekends"),
        ]);
        let registration = form.volunteer().expect("complete form");
        assert_eq!(registration.email, "sam@example.org");
        assert_eq!(registration.skills, vec!["teaching", "mentoring"]);
        assert_eq!(registration.availability, vec!["weekends"]);
        assert_eq!(registration.experience, None);
    }

    #[test]
    fn organization_needs_name() {
        let form = form(&[(Field::Email, "org@example.org"), (Field::Password, "pw")]);
        assert!(form.organization().is_err());
    }

    #[test]
    fn blank_optional_fields_are_omitted() {
        let form = form(&[
            (Field::Name, "Food Bank"),
            (Field::Email, "org@example.org"),
            (Field::Password, "pw"),
            (Field::Website, "   "),
        ]);
        let registration = form.organization().expect("complete form");
        assert_eq!(registration.website, None);
        assert_eq!(registration.name, "Food Bank");
    }
}
