use log::{debug, info, warn};

use crate::email::{EmailSender, SubmitError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// Same rule as the native `required` attribute: any non-empty value passes.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|value| !value.is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    /// Starting a submission drops whatever feedback the last one left behind.
    pub fn begin(self) -> Self {
        SubmitStatus::Submitting
    }

    pub fn settle(self, result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => SubmitStatus::Success,
            Err(_) => SubmitStatus::Error,
        }
    }

    pub fn is_submitting(self) -> bool {
        self == SubmitStatus::Submitting
    }

    pub fn button_label(self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// CSS class and text for the line under the submit button.
    pub fn feedback(self) -> Option<(&'static str, &'static str)> {
        match self {
            SubmitStatus::Success => Some(("form-feedback success", "Message sent successfully!")),
            SubmitStatus::Error => Some((
                "form-feedback error",
                "Failed to send message. Please try again.",
            )),
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
        }
    }
}

/// Sends the form and reports which state the page should land in.
pub async fn deliver<S: EmailSender>(sender: &S, fields: &ContactFields) -> SubmitStatus {
    info!("Sending contact message");
    let result = sender.send(fields).await;
    match &result {
        Ok(()) => info!("Contact message delivered"),
        Err(e) => warn!("Contact message failed: {}", e),
    }
    SubmitStatus::Submitting.settle(&result)
}

/// One run of the submit handler.
///
/// Nothing happens without a mounted form or with a blank required field.
/// Otherwise the status goes to `Submitting` for as long as the send is
/// outstanding, then to `Success` or `Error`. `on_success` gets the form
/// back to clear it; on failure the inputs are left exactly as they are, so
/// anything typed while the request was in flight survives.
pub async fn submit_contact<S, F>(
    sender: &S,
    form: Option<F>,
    fields: ContactFields,
    set_status: impl Fn(SubmitStatus),
    on_success: impl FnOnce(F),
) -> Option<SubmitStatus>
where
    S: EmailSender,
{
    let form = form?;
    if !fields.is_complete() {
        debug!("Contact form submitted with blank fields, ignoring");
        return None;
    }

    set_status(SubmitStatus::Idle.begin());
    let outcome = deliver(sender, &fields).await;
    if outcome == SubmitStatus::Success {
        on_success(form);
    }
    set_status(outcome);
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use tokio::sync::oneshot;
    use tokio::task::{self, LocalSet};

    thread_local! {
        static LOGGED: RefCell<Vec<String>> = RefCell::new(Vec::new());
    }

    /// Keeps each test thread's log lines so a test can read back its own.
    struct ThreadLog;

    impl log::Log for ThreadLog {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            LOGGED.with(|lines| lines.borrow_mut().push(record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static THREAD_LOG: ThreadLog = ThreadLog;

    fn capture_logs() {
        // Only the first caller installs it; later calls just reuse it.
        if log::set_logger(&THREAD_LOG).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
        LOGGED.with(|lines| lines.borrow_mut().clear());
    }

    /// Answers only when the test releases the reply.
    struct HeldSender {
        reply: RefCell<Option<oneshot::Receiver<Result<(), SubmitError>>>>,
        calls: Cell<usize>,
    }

    impl HeldSender {
        fn new() -> (Rc<Self>, oneshot::Sender<Result<(), SubmitError>>) {
            let (tx, rx) = oneshot::channel();
            let sender = Self {
                reply: RefCell::new(Some(rx)),
                calls: Cell::new(0),
            };
            (Rc::new(sender), tx)
        }
    }

    impl EmailSender for HeldSender {
        async fn send(&self, _fields: &ContactFields) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            let reply = self.reply.borrow_mut().take();
            match reply {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(SubmitError::Request("reply dropped".to_string()))),
                None => Err(SubmitError::Request("already sent".to_string())),
            }
        }
    }

    #[derive(Debug, Default)]
    struct Page {
        status: SubmitStatus,
        fields: ContactFields,
        resets: usize,
    }

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ravi".to_string(),
            email: "ravi@example.mu".to_string(),
            message: "We need a FinOps review".to_string(),
        }
    }

    fn page_with(fields: ContactFields) -> Rc<RefCell<Page>> {
        Rc::new(RefCell::new(Page {
            fields,
            ..Page::default()
        }))
    }

    /// Runs the handler the way the form does: a snapshot of the fields goes
    /// out, status and reset land back on the shared page.
    fn spawn_submit(
        sender: Rc<HeldSender>,
        page: Rc<RefCell<Page>>,
        form: Option<()>,
    ) -> task::JoinHandle<Option<SubmitStatus>> {
        let snapshot = page.borrow().fields.clone();
        task::spawn_local(async move {
            let status_page = page.clone();
            submit_contact(
                &*sender,
                form,
                snapshot,
                move |status| status_page.borrow_mut().status = status,
                move |()| {
                    let mut page = page.borrow_mut();
                    page.fields = ContactFields::default();
                    page.resets += 1;
                },
            )
            .await
        })
    }

    async fn settle_scheduler() {
        for _ in 0..4 {
            task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn success_clears_every_field() {
        LocalSet::new()
            .run_until(async {
                let (sender, reply) = HeldSender::new();
                let page = page_with(filled());
                let handle = spawn_submit(sender.clone(), page.clone(), Some(()));

                settle_scheduler().await;
                assert_eq!(page.borrow().status, SubmitStatus::Submitting);
                assert_eq!(page.borrow().fields, filled());

                reply.send(Ok(())).unwrap();
                assert_eq!(handle.await.unwrap(), Some(SubmitStatus::Success));

                let page = page.borrow();
                assert_eq!(page.status, SubmitStatus::Success);
                assert_eq!(page.fields, ContactFields::default());
                assert_eq!(page.resets, 1);
                assert_eq!(sender.calls.get(), 1);
                assert_eq!(
                    page.status.feedback().map(|(_, text)| text),
                    Some("Message sent successfully!")
                );
            })
            .await;
    }

    #[tokio::test]
    async fn failure_keeps_text_typed_while_sending() {
        LocalSet::new()
            .run_until(async {
                let (sender, reply) = HeldSender::new();
                let page = page_with(filled());
                let handle = spawn_submit(sender.clone(), page.clone(), Some(()));

                settle_scheduler().await;
                assert_eq!(page.borrow().status, SubmitStatus::Submitting);
                page.borrow_mut().fields.message.push_str(", and a migration plan");

                reply.send(Err(SubmitError::Rejected { status: 500 })).unwrap();
                assert_eq!(handle.await.unwrap(), Some(SubmitStatus::Error));

                let page = page.borrow();
                assert_eq!(page.status, SubmitStatus::Error);
                assert_eq!(page.resets, 0);
                assert_eq!(
                    page.fields.message,
                    "We need a FinOps review, and a migration plan"
                );
                assert_eq!(page.fields.name, "Ravi");
                assert_eq!(
                    page.status.feedback().map(|(_, text)| text),
                    Some("Failed to send message. Please try again.")
                );
            })
            .await;
    }

    #[tokio::test]
    async fn button_disabled_only_while_request_outstanding() {
        for result in [Ok(()), Err(SubmitError::Request("offline".to_string()))] {
            LocalSet::new()
                .run_until(async {
                    let (sender, reply) = HeldSender::new();
                    let page = page_with(filled());
                    assert!(!page.borrow().status.is_submitting());

                    let handle = spawn_submit(sender, page.clone(), Some(()));
                    settle_scheduler().await;
                    let pending = page.borrow().status;
                    assert!(pending.is_submitting());
                    assert_eq!(pending.button_label(), "Sending...");

                    reply.send(result).unwrap();
                    handle.await.unwrap();
                    let settled = page.borrow().status;
                    assert!(!settled.is_submitting());
                    assert_eq!(settled.button_label(), "Send Message");
                })
                .await;
        }
    }

    #[tokio::test]
    async fn missing_form_is_a_no_op() {
        LocalSet::new()
            .run_until(async {
                let (sender, _reply) = HeldSender::new();
                let page = page_with(filled());
                let handle = spawn_submit(sender.clone(), page.clone(), None);

                assert_eq!(handle.await.unwrap(), None);
                assert_eq!(sender.calls.get(), 0);
                assert_eq!(page.borrow().status, SubmitStatus::Idle);
            })
            .await;
    }

    #[tokio::test]
    async fn empty_required_field_sends_nothing() {
        let blanks = [
            ContactFields {
                name: String::new(),
                ..filled()
            },
            ContactFields {
                email: String::new(),
                ..filled()
            },
            ContactFields {
                message: String::new(),
                ..filled()
            },
        ];
        for fields in blanks {
            LocalSet::new()
                .run_until(async {
                    let (sender, _reply) = HeldSender::new();
                    let page = page_with(fields.clone());
                    let handle = spawn_submit(sender.clone(), page.clone(), Some(()));

                    assert_eq!(handle.await.unwrap(), None);
                    assert_eq!(sender.calls.get(), 0);
                    assert_eq!(page.borrow().status, SubmitStatus::Idle);
                    assert_eq!(page.borrow().fields, fields);
                })
                .await;
        }
    }

    #[tokio::test]
    async fn visitor_address_stays_out_of_the_console() {
        capture_logs();
        LocalSet::new()
            .run_until(async {
                let (sender, reply) = HeldSender::new();
                let page = page_with(filled());
                let handle = spawn_submit(sender, page, Some(()));
                settle_scheduler().await;
                reply.send(Err(SubmitError::Rejected { status: 422 })).unwrap();
                handle.await.unwrap();
            })
            .await;

        let lines = LOGGED.with(|lines| lines.borrow().clone());
        assert!(lines.iter().any(|line| line.contains("Sending contact message")));
        assert!(lines.iter().all(|line| !line.contains("ravi@example.mu")));
    }

    #[test]
    fn whitespace_counts_as_filled_in() {
        let spaces = ContactFields {
            message: "   ".to_string(),
            ..filled()
        };
        assert!(spaces.is_complete());
    }

    #[test]
    fn resubmitting_clears_previous_feedback() {
        assert_eq!(SubmitStatus::Error.begin(), SubmitStatus::Submitting);
        assert_eq!(SubmitStatus::Success.begin().feedback(), None);
    }
}
