use api::{AttendanceDraft, AttendanceRecord};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaPlus, FaTrash};
use dioxus_free_icons::Icon;

use ui::{
    toast_error, toast_success, use_mutation, use_paginated_list, use_session, use_toasts,
    ConfirmDialog, ModalOverlay, PageHeader, PaginationControl, SpinnerInline, StatusBadge,
};

const PAGE_SIZE: u32 = 10;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn Attendance() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut page = use_signal(|| 1u32);
    let mut list = use_paginated_list(page.into(), PAGE_SIZE, move |p, l| {
        let client = session.client();
        async move { client.list_attendance(p, l).await }
    });

    // Member choices for the form; one big page is plenty for a team.
    let members = use_paginated_list(use_signal(|| 1u32).into(), 100, move |p, l| {
        let client = session.client();
        async move { client.list_team(p, l).await }
    });

    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut deleting_id = use_signal(|| Option::<String>::None);
    let mut save = use_mutation();
    let mut remove = use_mutation();

    let mut member_id = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut check_in = use_signal(|| "09:00".to_string());
    let mut check_out = use_signal(String::new);
    let mut status = use_signal(|| "present".to_string());
    let mut notes = use_signal(String::new);

    let mut reset_form = move || {
        member_id.set(String::new());
        date.set(String::new());
        check_in.set("09:00".to_string());
        check_out.set(String::new());
        status.set("present".to_string());
        notes.set(String::new());
        editing_id.set(None);
    };

    let mut open_edit = move |record: AttendanceRecord| {
        member_id.set(record.member.id);
        date.set(record.date);
        check_in.set(record.check_in);
        check_out.set(record.check_out.unwrap_or_default());
        status.set(record.status);
        notes.set(record.notes.unwrap_or_default());
        editing_id.set(Some(record.id));
        modal_open.set(true);
    };

    let handle_submit = move |_| async move {
        if member_id().is_empty() {
            toast_error(&mut toasts, "Select a team member");
            return;
        }
        if date().trim().is_empty() {
            toast_error(&mut toasts, "Date is required");
            return;
        }

        let draft = AttendanceDraft {
            member_id: member_id(),
            date: date(),
            check_in: check_in(),
            check_out: optional(check_out()),
            status: status(),
            notes: optional(notes()),
        };
        let client = session.client();

        let result = match editing_id() {
            Some(id) => save
                .run(async { client.update_attendance(&id, &draft).await })
                .await
                .map(|_| "Attendance updated"),
            None => save
                .run(async { client.create_attendance(&draft).await })
                .await
                .map(|_| "Attendance recorded"),
        };

        match result {
            Ok(message) => {
                toast_success(&mut toasts, message);
                modal_open.set(false);
                reset_form();
                list.refetch();
            }
            Err(err) => toast_error(&mut toasts, err.to_string()),
        }
    };

    let confirm_delete = move |_| async move {
        let Some(id) = deleting_id() else { return };
        let client = session.client();
        match remove
            .run(async { client.delete_attendance(&id).await })
            .await
        {
            Ok(()) => {
                toast_success(&mut toasts, "Attendance record deleted");
                list.refetch();
            }
            Err(err) => toast_error(&mut toasts, err.to_string()),
        }
        deleting_id.set(None);
    };

    rsx! {
        div {
            class: "view-page",

            PageHeader {
                title: "Attendance",
                subtitle: "Track daily team attendance",
                button {
                    class: "primary with-icon",
                    onclick: move |_| {
                        reset_form();
                        modal_open.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Record Attendance"
                }
            }

            div {
                class: "card",
                if list.loading() {
                    SpinnerInline {}
                } else if let Some(error) = list.error() {
                    div { class: "table-empty", "{error}" }
                } else if list.items().is_empty() {
                    div { class: "table-empty", "No attendance records." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Member" }
                                th { "Date" }
                                th { "Check in" }
                                th { "Check out" }
                                th { "Status" }
                                th { "Notes" }
                                th { "" }
                            }
                        }
                        tbody {
                            for record in list.items() {
                                tr {
                                    key: "{record.id}",
                                    td { class: "cell-primary", "{record.member.name}" }
                                    td { "{record.date}" }
                                    td { "{record.check_in}" }
                                    td { {record.check_out.clone().unwrap_or_else(|| "-".to_string())} }
                                    td { StatusBadge { status: record.status.clone() } }
                                    td {
                                        class: "cell-muted",
                                        {record.notes.clone().unwrap_or_default()}
                                    }
                                    td {
                                        class: "row-actions",
                                        button {
                                            class: "icon-button",
                                            title: "Edit",
                                            onclick: {
                                                let record = record.clone();
                                                move |_| open_edit(record.clone())
                                            },
                                            Icon { icon: FaPen, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-button danger",
                                            title: "Delete",
                                            onclick: {
                                                let id = record.id.clone();
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

            if modal_open() {
                ModalOverlay {
                    on_close: move |_| {
                        modal_open.set(false);
                        reset_form();
                    },
                    div {
                        class: "modal-form",
                        h2 { if editing_id().is_some() { "Edit Attendance" } else { "Record Attendance" } }

                        div {
                            class: "form-field",
                            label { r#for: "attendance-member", "Team member" }
                            select {
                                id: "attendance-member",
                                value: member_id(),
                                onchange: move |evt| member_id.set(evt.value()),
                                option { value: "", "Select a member" }
                                for member in members.items() {
                                    option {
                                        key: "{member.id}",
                                        value: "{member.id}",
                                        "{member.name}"
                                    }
                                }
                            }
                        }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "attendance-date", "Date" }
                                input {
                                    id: "attendance-date",
                                    r#type: "date",
                                    value: date(),
                                    oninput: move |evt| date.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "attendance-status", "Status" }
                                select {
                                    id: "attendance-status",
                                    value: status(),
                                    onchange: move |evt| status.set(evt.value()),
                                    option { value: "present", "Present" }
                                    option { value: "absent", "Absent" }
                                    option { value: "late", "Late" }
                                    option { value: "half-day", "Half day" }
                                }
                            }
                        }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "attendance-in", "Check in" }
                                input {
                                    id: "attendance-in",
                                    r#type: "time",
                                    value: check_in(),
                                    oninput: move |evt| check_in.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "attendance-out", "Check out" }
                                input {
                                    id: "attendance-out",
                                    r#type: "time",
                                    value: check_out(),
                                    oninput: move |evt| check_out.set(evt.value()),
                                }
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "attendance-notes", "Notes" }
                            textarea {
                                id: "attendance-notes",
                                rows: 2,
                                value: notes(),
                                oninput: move |evt| notes.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-actions",
                            button {
                                class: "primary",
                                disabled: save.loading(),
                                onclick: handle_submit,
                                if save.loading() { "Saving..." } else { "Save" }
                            }
                            button {
                                class: "secondary",
                                onclick: move |_| {
                                    modal_open.set(false);
                                    reset_form();
                                },
                                "Cancel"
                            }
                        }
                    }
                }
            }

            if deleting_id().is_some() {
                ConfirmDialog {
                    title: "Delete attendance record",
                    message: "Are you sure you want to delete this record?",
                    busy: remove.loading(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting_id.set(None),
                }
            }
        }
    }
}
