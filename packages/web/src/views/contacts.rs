use api::{Contact, ContactUpdate};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMessage, FaTrash};
use dioxus_free_icons::Icon;

use ui::{
    toast_error, toast_success, use_mutation, use_paginated_list, use_session, use_toasts,
    ConfirmDialog, ModalOverlay, PaginationControl, SpinnerInline, StatusBadge,
};

const PAGE_SIZE: u32 = 10;

#[component]
pub fn Contacts() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut page = use_signal(|| 1u32);
    let mut list = use_paginated_list(page.into(), PAGE_SIZE, move |p, l| {
        let client = session.client();
        async move { client.list_contacts(p, l).await }
    });

    let mut deleting_id = use_signal(|| Option::<String>::None);
    let mut note_target = use_signal(|| Option::<Contact>::None);
    let mut note_text = use_signal(String::new);
    let mut update = use_mutation();
    let mut add_note = use_mutation();
    let mut remove = use_mutation();

    let change_status = move |id: String, status: String| async move {
        let client = session.client();
        let body = ContactUpdate {
            status: Some(status),
            priority: None,
        };
        match update
            .run(async { client.update_contact(&id, &body).await })
            .await
        {
            Ok(_) => {
                toast_success(&mut toasts, "Contact updated");
                list.refetch();
            }
            Err(err) => toast_error(&mut toasts, err.to_string()),
        }
    };

    let handle_add_note = move |_| async move {
        let Some(contact) = note_target() else { return };
        if note_text().trim().is_empty() {
            toast_error(&mut toasts, "Note text is required");
            return;
        }
        let client = session.client();
        let note = note_text();
        match add_note
            .run(async { client.add_contact_note(&contact.id, &note).await })
            .await
        {
            Ok(updated) => {
                toast_success(&mut toasts, "Note added");
                note_text.set(String::new());
                note_target.set(Some(updated));
                list.refetch();
            }
            Err(err) => toast_error(&mut toasts, err.to_string()),
        }
    };

    let confirm_delete = move |_| async move {
        let Some(id) = deleting_id() else { return };
        let client = session.client();
        match remove.run(async { client.delete_contact(&id).await }).await {
            Ok(()) => {
                toast_success(&mut toasts, "Contact deleted");
                list.refetch();
            }
            Err(err) => toast_error(&mut toasts, err.to_string()),
        }
        deleting_id.set(None);
    };

    rsx! {
        div {
            class: "view-page",

            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Contacts" }
                    p { class: "page-subtitle", "Manage contact inquiries" }
                }
            }

            div {
                class: "card",
                if list.loading() {
                    SpinnerInline {}
                } else if let Some(error) = list.error() {
                    div { class: "table-empty", "{error}" }
                } else if list.items().is_empty() {
                    div { class: "table-empty", "No contact inquiries." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Subject" }
                                th { "Message" }
                                th { "Priority" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for contact in list.items() {
                                tr {
                                    key: "{contact.id}",
                                    td { class: "cell-primary", "{contact.name}" }
                                    td {
                                        a { class: "cell-link", href: "mailto:{contact.email}", "{contact.email}" }
                                    }
                                    td { "{contact.subject}" }
                                    td {
                                        class: "cell-muted cell-truncate",
                                        title: "{contact.message}",
                                        "{contact.message}"
                                    }
                                    td { StatusBadge { status: contact.priority.clone() } }
                                    td {
                                        select {
                                            class: "inline-select",
                                            value: contact.status.clone(),
                                            onchange: {
                                                let id = contact.id.clone();
                                                move |evt: FormEvent| change_status(id.clone(), evt.value())
                                            },
                                            option { value: "new", "new" }
                                            option { value: "in-progress", "in-progress" }
                                            option { value: "replied", "replied" }
                                            option { value: "closed", "closed" }
                                        }
                                    }
                                    td {
                                        class: "row-actions",
                                        button {
                                            class: "icon-button",
                                            title: "Notes",
                                            onclick: {
                                                let contact = contact.clone();
                                                move |_| {
                                                    note_text.set(String::new());
                                                    note_target.set(Some(contact.clone()));
                                                }
                                            },
                                            Icon { icon: FaMessage, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-button danger",
                                            title: "Delete",
                                            onclick: {
                                                let id = contact.id.clone();
                                                move |_| deleting_id.set(Some(id.clone()))
                                            },
                                            Icon { icon: FaTrash, width: 14, height: 14 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            PaginationControl {
                current_page: page(),
                has_next_page: list.has_next_page(),
                item_count: list.items().len(),
                on_page_change: move |p| page.set(p),
            }

            if let Some(contact) = note_target() {
                ModalOverlay {
                    on_close: move |_| note_target.set(None),
                    div {
                        class: "modal-form",
                        h2 { "Notes for {contact.name}" }

                        if contact.notes.is_empty() {
                            p { class: "cell-muted", "No notes yet." }
                        } else {
                            div {
                                class: "note-list",
                                for (index, note) in contact.notes.iter().enumerate() {
                                    div {
                                        key: "{index}",
                                        class: "note-entry",
                                        p { "{note.note}" }
                                        span {
                                            class: "note-meta",
                                            "{note.added_by.name} - {note.added_at}"
                                        }
                                    }
                                }
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "contact-note", "Add note" }
                            textarea {
                                id: "contact-note",
                                rows: 3,
                                value: note_text(),
                                oninput: move |evt| note_text.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-actions",
                            button {
                                class: "primary",
                                disabled: add_note.loading(),
                                onclick: handle_add_note,
                                if add_note.loading() { "Adding..." } else { "Add Note" }
                            }
                            button {
                                class: "secondary",
                                onclick: move |_| note_target.set(None),
                                "Close"
                            }
                        }
                    }
                }
            }

            if deleting_id().is_some() {
                ConfirmDialog {
                    title: "Delete contact",
                    message: "Are you sure you want to delete this contact inquiry?",
                    busy: remove.loading(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting_id.set(None),
                }
            }
        }
    }
}
