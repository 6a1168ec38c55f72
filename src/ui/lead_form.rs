/// Lead form views
///
/// The contact variant shows its result inline above the fields; the
/// estimate variant shows it as a popup over the whole page.
use iced::widget::{
    button, column, container, mouse_area, opaque, pick_list, row, text, text_editor, text_input, Column,
};
use iced::{Alignment, Element, Length};

use crate::error::SubmitError;
use crate::state::data::Business;
use crate::state::lead::{
    service_option, FieldSpec, FormKind, InputKind, LeadForm, ResetDelays, ServiceOption, SubmitStatus,
    SERVICE_OPTIONS,
};
use crate::ui::style;
use crate::Message;

#[derive(Debug, Clone)]
pub enum LeadMessage {
    FieldChanged(&'static str, String),
    /// Edit in the multi-line details box
    DetailsEdited(text_editor::Action),
    Submit,
    /// Outcome of the POST started by `Submit`
    Submitted(Result<(), SubmitError>),
    Dismiss,
}

/// A mounted lead form plus the editor buffer behind its multi-line field
pub struct LeadPanel {
    pub form: LeadForm,
    details: text_editor::Content,
}

impl LeadPanel {
    pub fn new(kind: FormKind, delays: ResetDelays) -> Self {
        Self {
            form: LeadForm::new(kind, delays),
            details: text_editor::Content::new(),
        }
    }

    /// Apply an editor action, mirroring edits into the form field
    pub fn edit_details(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        self.details.perform(action);
        if !is_edit {
            return;
        }

        if let Some(name) = details_field(self.form.kind()) {
            let text = self.details.text();
            self.form.update_field(name, text.trim_end_matches('\n'));
        }
    }

    /// Empty the editor once the form has cleared the field it mirrors
    pub fn sync_details(&mut self) {
        let Some(name) = details_field(self.form.kind()) else {
            return;
        };
        if self.form.value(name).is_empty() && !self.details.text().trim().is_empty() {
            self.details = text_editor::Content::new();
        }
    }
}

fn details_field(kind: FormKind) -> Option<&'static str> {
    kind.fields()
        .iter()
        .find(|spec| spec.input == InputKind::Multiline)
        .map(|spec| spec.name)
}

/// The form itself, with the inline notice for the contact variant
pub fn view<'a>(panel: &'a LeadPanel, mount: u64, business: &'a Business) -> Element<'a, Message> {
    let form = &panel.form;
    let title = match form.kind() {
        FormKind::Contact => "Request a Quote",
        FormKind::Estimate => "Get a FREE Estimate",
    };

    let mut content = Column::new().spacing(14).push(text(title).size(24));

    if form.kind() == FormKind::Contact {
        if let Some(notice) = inline_notice(form, mount, business) {
            content = content.push(notice);
        }
    }

    for spec in form.kind().fields() {
        content = content.push(field(panel, spec, mount));
    }

    if !form.is_blank() {
        if let Err(problem) = form.validate() {
            content = content.push(text(capitalize(&problem.to_string())).size(13).color(style::MUTED));
        }
    }

    let label = if form.status() == SubmitStatus::Submitting {
        "Sending..."
    } else {
        form.kind().submit_label()
    };
    let submit = button(container(text(label).size(16)).center_x(Length::Fill))
        .width(Length::Fill)
        .padding(14)
        .style(style::gold_button)
        .on_press_maybe(form.can_submit().then_some(Message::Lead(mount, LeadMessage::Submit)));

    container(content.push(submit))
        .padding(28)
        .width(Length::Fill)
        .style(style::card)
        .into()
}

fn field<'a>(panel: &'a LeadPanel, spec: &'static FieldSpec, mount: u64) -> Element<'a, Message> {
    let form = &panel.form;
    let name = spec.name;
    let label = if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };

    let input: Element<'a, Message> = match spec.input {
        InputKind::Choice => pick_list(SERVICE_OPTIONS, service_option(form.value(name)), move |option: ServiceOption| {
            Message::Lead(mount, LeadMessage::FieldChanged(name, option.value.to_string()))
        })
        .placeholder("Select a service")
        .width(Length::Fill)
        .padding(10)
        .into(),
        InputKind::Multiline => text_editor(&panel.details)
            .placeholder("Tell us about your project...")
            .on_action(move |action| Message::Lead(mount, LeadMessage::DetailsEdited(action)))
            .height(110)
            .padding(10)
            .into(),
        InputKind::Text | InputKind::Email | InputKind::Tel => text_input(spec.label, form.value(name))
            .on_input(move |value| Message::Lead(mount, LeadMessage::FieldChanged(name, value)))
            .padding(10)
            .into(),
    };

    column![text(label).size(14).color(style::MUTED), input].spacing(4).into()
}

fn inline_notice<'a>(form: &'a LeadForm, mount: u64, business: &'a Business) -> Option<Element<'a, Message>> {
    let (accent, headline, detail) = match form.status() {
        SubmitStatus::Success => (
            style::SUCCESS,
            "Thank you for your request!".to_string(),
            format!(
                "We'll contact you within 24 hours at {}.",
                form.acknowledged_email().unwrap_or("the email provided")
            ),
        ),
        SubmitStatus::Error => (
            style::DANGER,
            "Oops! Something went wrong.".to_string(),
            format!("Please try again or call us directly at {}.", business.phone),
        ),
        SubmitStatus::Idle | SubmitStatus::Submitting => return None,
    };

    let close = button(text("×").size(18))
        .style(style::link_button)
        .on_press(Message::Lead(mount, LeadMessage::Dismiss));

    let body = row![
        column![text(headline).size(16).color(accent), text(detail).size(14)]
            .spacing(4)
            .width(Length::Fill),
        close,
    ]
    .align_y(Alignment::Start);

    Some(
        container(body)
            .padding(14)
            .width(Length::Fill)
            .style(style::notice(accent))
            .into(),
    )
}

/// Popup shown over the page while the estimate form has a result.
///
/// Clicking outside the popup dismisses it; clicks on the popup itself
/// are captured before they reach the backdrop.
pub fn popup<'a>(form: &'a LeadForm, mount: u64, business: &'a Business) -> Option<Element<'a, Message>> {
    let (headline, detail) = match form.status() {
        SubmitStatus::Success => ("We received your request", "We will reach out within 24 hours".to_string()),
        SubmitStatus::Error => ("Something went wrong", format!("Please call us at {}", business.phone)),
        SubmitStatus::Idle | SubmitStatus::Submitting => return None,
    };

    let dismiss = Message::Lead(mount, LeadMessage::Dismiss);

    let card = container(
        column![
            row![
                iced::widget::horizontal_space(),
                button(text("×").size(20)).style(style::link_button).on_press(dismiss.clone()),
            ],
            text(headline).size(26),
            text(detail).size(16),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .padding(28)
    .max_width(440)
    .style(if form.status() == SubmitStatus::Success {
        style::banner
    } else {
        style::alert
    });

    let overlay = mouse_area(
        container(opaque(card))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(style::backdrop),
    )
    .on_press(dismiss);

    Some(opaque(overlay))
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
