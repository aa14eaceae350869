use api::{Technology, TechnologyDraft};
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
pub fn Technologies() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut page = use_signal(|| 1u32);
    let mut list = use_paginated_list(page.into(), PAGE_SIZE, move |p, l| {
        let client = session.client();
        async move { client.list_technologies(p, l).await }
    });

    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut deleting_id = use_signal(|| Option::<String>::None);
    let mut save = use_mutation();
    let mut remove = use_mutation();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(|| "frontend".to_string());
    let mut kind = use_signal(|| "framework".to_string());
    let mut proficiency_level = use_signal(|| "intermediate".to_string());
    let mut color = use_signal(|| "#0ea5e9".to_string());
    let mut is_active = use_signal(|| true);
    let mut icon_url = use_signal(String::new);

    let mut reset_form = move || {
        name.set(String::new());
        description.set(String::new());
        category.set("frontend".to_string());
        kind.set("framework".to_string());
        proficiency_level.set("intermediate".to_string());
        color.set("#0ea5e9".to_string());
        is_active.set(true);
        icon_url.set(String::new());
        editing_id.set(None);
    };

    let mut open_edit = move |tech: Technology| {
        name.set(tech.name);
        description.set(tech.description);
        category.set(tech.category);
        kind.set(tech.kind);
        proficiency_level.set(tech.proficiency_level);
        color.set(tech.color);
        is_active.set(tech.is_active);
        icon_url.set(tech.icon.url);
        editing_id.set(Some(tech.id));
        modal_open.set(true);
    };

    let handle_icon = move |evt: FormEvent| async move {
        if let Some(file_engine) = evt.files() {
            if let Some(data_url) = read_file_as_data_url(file_engine).await {
                icon_url.set(data_url);
            }
        }
    };

    let handle_submit = move |_| async move {
        if name().trim().is_empty() {
            toast_error(&mut toasts, "Technology name is required");
            return;
        }

        let draft = TechnologyDraft {
            name: name(),
            description: description(),
            category: category(),
            kind: kind(),
            proficiency_level: proficiency_level(),
            color: color(),
            is_active: is_active(),
            icon: data_url_image(&icon_url()),
        };
        let client = session.client();

        let result = match editing_id() {
            Some(id) => save
                .run(async { client.update_technology(&id, &draft).await })
                .await
                .map(|_| "Technology updated"),
            None => save
                .run(async { client.create_technology(&draft).await })
                .await
                .map(|_| "Technology created"),
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
            .run(async { client.delete_technology(&id).await })
            .await
        {
            Ok(()) => {
                toast_success(&mut toasts, "Technology deleted");
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
                title: "Technologies",
                subtitle: "Manage the technology catalog",
                button {
                    class: "primary with-icon",
                    onclick: move |_| {
                        reset_form();
                        modal_open.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Technology"
                }
            }

            div {
                class: "card",
                if list.loading() {
                    SpinnerInline {}
                } else if let Some(error) = list.error() {
                    div { class: "table-empty", "{error}" }
                } else if list.items().is_empty() {
                    div { class: "table-empty", "No technologies yet." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Category" }
                                th { "Type" }
                                th { "Proficiency" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for tech in list.items() {
                                tr {
                                    key: "{tech.id}",
                                    td {
                                        class: "cell-primary",
                                        if !tech.icon.url.is_empty() {
                                            img { class: "cell-thumb", src: "{tech.icon.url}", alt: "" }
                                        }
                                        span {
                                            class: "color-dot",
                                            style: "background: {tech.color}",
                                        }
                                        "{tech.name}"
                                    }
                                    td { "{tech.category}" }
                                    td { "{tech.kind}" }
                                    td { "{tech.proficiency_level}" }
                                    td {
                                        StatusBadge {
                                            status: if tech.is_active { "active" } else { "inactive" },
                                        }
                                    }
                                    td {
                                        class: "row-actions",
                                        button {
                                            class: "icon-button",
                                            title: "Edit",
                                            onclick: {
                                                let tech = tech.clone();
                                                move |_| open_edit(tech.clone())
                                            },
                                            Icon { icon: FaPen, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-button danger",
                                            title: "Delete",
                                            onclick: {
                                                let id = tech.id.clone();
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
                        h2 { if editing_id().is_some() { "Edit Technology" } else { "Add Technology" } }

                        div {
                            class: "form-field",
                            label { r#for: "tech-name", "Name" }
                            input {
                                id: "tech-name",
                                r#type: "text",
                                value: name(),
                                oninput: move |evt| name.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "tech-description", "Description" }
                            textarea {
                                id: "tech-description",
                                rows: 3,
                                value: description(),
                                oninput: move |evt| description.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "tech-category", "Category" }
                                select {
                                    id: "tech-category",
                                    value: category(),
                                    onchange: move |evt| category.set(evt.value()),
                                    option { value: "frontend", "Frontend" }
                                    option { value: "backend", "Backend" }
                                    option { value: "database", "Database" }
                                    option { value: "devops", "DevOps" }
                                    option { value: "mobile", "Mobile" }
                                    option { value: "other", "Other" }
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "tech-kind", "Type" }
                                select {
                                    id: "tech-kind",
                                    value: kind(),
                                    onchange: move |evt| kind.set(evt.value()),
                                    option { value: "language", "Language" }
                                    option { value: "framework", "Framework" }
                                    option { value: "library", "Library" }
                                    option { value: "tool", "Tool" }
                                    option { value: "platform", "Platform" }
                                }
                            }
                        }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "tech-proficiency", "Proficiency" }
                                select {
                                    id: "tech-proficiency",
                                    value: proficiency_level(),
                                    onchange: move |evt| proficiency_level.set(evt.value()),
                                    option { value: "beginner", "Beginner" }
                                    option { value: "intermediate", "Intermediate" }
                                    option { value: "advanced", "Advanced" }
                                    option { value: "expert", "Expert" }
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "tech-color", "Color" }
                                input {
                                    id: "tech-color",
                                    r#type: "color",
                                    value: color(),
                                    oninput: move |evt| color.set(evt.value()),
                                }
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "tech-icon", "Icon" }
                            input {
                                id: "tech-icon",
                                r#type: "file",
                                accept: "image/*",
                                onchange: handle_icon,
                            }
                            if !icon_url().is_empty() {
                                img { class: "image-preview", src: "{icon_url()}", alt: "Preview" }
                            }
                        }

                        label {
                            class: "form-check",
                            input {
                                r#type: "checkbox",
                                checked: is_active(),
                                onchange: move |evt| is_active.set(evt.checked()),
                            }
                            "Active"
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
                    title: "Delete technology",
                    message: "Are you sure you want to delete this technology?",
                    busy: remove.loading(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting_id.set(None),
                }
            }
        }
    }
}
