use api::{TeamMember, TeamMemberDraft};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaPlus, FaTrash};
use dioxus_free_icons::Icon;

use ui::{
    data_url_image, read_file_as_data_url, toast_error, toast_success, use_mutation,
    use_paginated_list, use_session, use_toasts, ConfirmDialog, ModalOverlay, PageHeader,
    PaginationControl, SpinnerInline, StatusBadge,
};

const PAGE_SIZE: u32 = 10;

#[component]
pub fn Team() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut page = use_signal(|| 1u32);
    let mut list = use_paginated_list(page.into(), PAGE_SIZE, move |p, l| {
        let client = session.client();
        async move { client.list_team(p, l).await }
    });

    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut deleting_id = use_signal(|| Option::<String>::None);
    let mut save = use_mutation();
    let mut remove = use_mutation();

    let mut name = use_signal(String::new);
    let mut position = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut experience = use_signal(|| 0u32);
    let mut is_active = use_signal(|| true);
    let mut avatar_url = use_signal(String::new);

    let mut reset_form = move || {
        name.set(String::new());
        position.set(String::new());
        bio.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        department.set(String::new());
        experience.set(0);
        is_active.set(true);
        avatar_url.set(String::new());
        editing_id.set(None);
    };

    let mut open_edit = move |member: TeamMember| {
        name.set(member.name);
        position.set(member.position);
        bio.set(member.bio);
        email.set(member.email);
        phone.set(member.phone);
        department.set(member.department);
        experience.set(member.experience);
        is_active.set(member.is_active);
        avatar_url.set(member.avatar.url);
        editing_id.set(Some(member.id));
        modal_open.set(true);
    };

    let handle_avatar = move |evt: FormEvent| async move {
        if let Some(file_engine) = evt.files() {
            if let Some(data_url) = read_file_as_data_url(file_engine).await {
                avatar_url.set(data_url);
            }
        }
    };

    let handle_submit = move |_| async move {
        if name().trim().is_empty() {
            toast_error(&mut toasts, "Member name is required");
            return;
        }

        let draft = TeamMemberDraft {
            name: name(),
            position: position(),
            bio: bio(),
            email: email(),
            phone: phone(),
            department: department(),
            experience: experience(),
            is_active: is_active(),
            avatar: data_url_image(&avatar_url()),
        };
        let client = session.client();

        let result = match editing_id() {
            Some(id) => save
                .run(async { client.update_team_member(&id, &draft).await })
                .await
                .map(|_| "Team member updated"),
            None => save
                .run(async { client.create_team_member(&draft).await })
                .await
                .map(|_| "Team member created"),
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
            .run(async { client.delete_team_member(&id).await })
            .await
        {
            Ok(()) => {
                toast_success(&mut toasts, "Team member deleted");
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
                title: "Team",
                subtitle: "Manage team members",
                button {
                    class: "primary with-icon",
                    onclick: move |_| {
                        reset_form();
                        modal_open.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Member"
                }
            }

            div {
                class: "card",
                if list.loading() {
                    SpinnerInline {}
                } else if let Some(error) = list.error() {
                    div { class: "table-empty", "{error}" }
                } else if list.items().is_empty() {
                    div { class: "table-empty", "No team members yet." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Position" }
                                th { "Department" }
                                th { "Email" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for member in list.items() {
                                tr {
                                    key: "{member.id}",
                                    td {
                                        class: "cell-primary",
                                        if !member.avatar.url.is_empty() {
                                            img { class: "cell-thumb round", src: "{member.avatar.url}", alt: "" }
                                        }
                                        "{member.name}"
                                    }
                                    td { "{member.position}" }
                                    td { "{member.department}" }
                                    td {
                                        a { class: "cell-link", href: "mailto:{member.email}", "{member.email}" }
                                    }
                                    td {
                                        StatusBadge {
                                            status: if member.is_active { "active" } else { "inactive" },
                                        }
                                    }
                                    td {
                                        class: "row-actions",
                                        button {
                                            class: "icon-button",
                                            title: "Edit",
                                            onclick: {
                                                let member = member.clone();
                                                move |_| open_edit(member.clone())
                                            },
                                            Icon { icon: FaPen, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-button danger",
                                            title: "Delete",
                                            onclick: {
                                                let id = member.id.clone();
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
                        h2 { if editing_id().is_some() { "Edit Team Member" } else { "Add Team Member" } }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "member-name", "Name" }
                                input {
                                    id: "member-name",
                                    r#type: "text",
                                    value: name(),
                                    oninput: move |evt| name.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "member-position", "Position" }
                                input {
                                    id: "member-position",
                                    r#type: "text",
                                    value: position(),
                                    oninput: move |evt| position.set(evt.value()),
                                }
                            }
                        }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "member-email", "Email" }
                                input {
                                    id: "member-email",
                                    r#type: "email",
                                    value: email(),
                                    oninput: move |evt| email.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "member-phone", "Phone" }
                                input {
                                    id: "member-phone",
                                    r#type: "tel",
                                    value: phone(),
                                    oninput: move |evt| phone.set(evt.value()),
                                }
                            }
                        }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "member-department", "Department" }
                                input {
                                    id: "member-department",
                                    r#type: "text",
                                    value: department(),
                                    oninput: move |evt| department.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "member-experience", "Experience (years)" }
                                input {
                                    id: "member-experience",
                                    r#type: "number",
                                    min: "0",
                                    value: "{experience()}",
                                    oninput: move |evt| {
                                        if let Ok(v) = evt.value().parse::<u32>() {
                                            experience.set(v);
                                        }
                                    },
                                }
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "member-bio", "Bio" }
                            textarea {
                                id: "member-bio",
                                rows: 3,
                                value: bio(),
                                oninput: move |evt| bio.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "member-avatar", "Avatar" }
                            input {
                                id: "member-avatar",
                                r#type: "file",
                                accept: "image/*",
                                onchange: handle_avatar,
                            }
                            if !avatar_url().is_empty() {
                                img { class: "image-preview round", src: "{avatar_url()}", alt: "Preview" }
                            }
                        }

                        label {
                            class: "form-check",
                            input {
                                r#type: "checkbox",
                                checked: is_active(),
                                onchange: move |evt| is_active.set(evt.checked()),
                            }
                            "Active member"
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
                    title: "Delete team member",
                    message: "Are you sure you want to delete this team member?",
                    busy: remove.loading(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting_id.set(None),
                }
            }
        }
    }
}
