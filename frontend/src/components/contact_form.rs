use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{submit_contact, ContactFields, SubmitStatus};
use crate::email::EmailJsClient;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form_ref = use_node_ref();
    let fields = use_state(ContactFields::default);
    let status = use_state(SubmitStatus::default);

    let on_name = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fields.set(ContactFields {
                name: input.value(),
                ..(*fields).clone()
            });
        })
    };

    let on_email = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fields.set(ContactFields {
                email: input.value(),
                ..(*fields).clone()
            });
        })
    };

    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            fields.set(ContactFields {
                message: input.value(),
                ..(*fields).clone()
            });
        })
    };

    let onsubmit = {
        let form_ref = form_ref.clone();
        let fields = fields.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = form_ref.cast::<HtmlFormElement>();
            let snapshot = (*fields).clone();
            let fields = fields.clone();
            let status = status.clone();
            spawn_local(async move {
                let client = EmailJsClient::from_config();
                submit_contact(
                    &client,
                    form,
                    snapshot,
                    move |next| status.set(next),
                    move |form| {
                        form.reset();
                        fields.set(ContactFields::default());
                    },
                )
                .await;
            });
        })
    };

    html! {
        <form ref={form_ref} class="contact-form" {onsubmit}>
            <input
                type="text"
                name="user_name"
                placeholder="Name"
                required={true}
                value={fields.name.clone()}
                oninput={on_name}
            />
            <input
                type="email"
                name="user_email"
                placeholder="Email"
                required={true}
                value={fields.email.clone()}
                oninput={on_email}
            />
            <textarea
                name="message"
                placeholder="Message"
                rows="4"
                required={true}
                class="full-width"
                value={fields.message.clone()}
                oninput={on_message}
            />
            <button
                type="submit"
                class="submit-button full-width"
                disabled={status.is_submitting()}
            >
                { status.button_label() }
            </button>
            {
                if let Some((class, text)) = status.feedback() {
                    html! { <p class={classes!(class, "full-width")}>{ text }</p> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn renders_required_fields_and_enabled_button() {
        let rendered = ServerRenderer::<ContactForm>::new().render().await;

        for name in ["user_name", "user_email", "message"] {
            assert!(rendered.contains(&format!("name=\"{}\"", name)), "{}", name);
        }
        assert!(rendered.contains("required"));
        assert!(rendered.contains("Send Message"));
        assert!(!rendered.contains("disabled"));
        assert!(!rendered.contains("form-feedback"));
    }
}
