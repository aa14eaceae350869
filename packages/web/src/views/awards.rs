use api::{Award, AwardDraft};
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
pub fn Awards() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut page = use_signal(|| 1u32);
    let mut list = use_paginated_list(page.into(), PAGE_SIZE, move |p, l| {
        let client = session.client();
        async move { client.list_awards(p, l).await }
    });

    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut deleting_id = use_signal(|| Option::<String>::None);
    let mut save = use_mutation();
    let mut remove = use_mutation();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut organization = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut year = use_signal(|| 2026i32);
    let mut rank = use_signal(String::new);
    let mut is_active = use_signal(|| true);
    let mut image_url = use_signal(String::new);

    let mut reset_form = move || {
        title.set(String::new());
        description.set(String::new());
        organization.set(String::new());
        category.set(String::new());
        year.set(2026);
        rank.set(String::new());
        is_active.set(true);
        image_url.set(String::new());
        editing_id.set(None);
    };

    let mut open_edit = move |award: Award| {
        title.set(award.title);
        description.set(award.description);
        organization.set(award.organization);
        category.set(award.category);
        year.set(award.year);
        rank.set(award.rank);
        is_active.set(award.is_active);
        image_url.set(award.image.url);
        editing_id.set(Some(award.id));
        modal_open.set(true);
    };

    let handle_image = move |evt: FormEvent| async move {
        if let Some(file_engine) = evt.files() {
            if let Some(data_url) = read_file_as_data_url(file_engine).await {
                image_url.set(data_url);
            }
        }
    };

    let handle_submit = move |_| async move {
        if title().trim().is_empty() {
            toast_error(&mut toasts, "Award title is required");
            return;
        }

        let draft = AwardDraft {
            title: title(),
            description: description(),
            organization: organization(),
            category: category(),
            year: year(),
            rank: rank(),
            is_active: is_active(),
            image: data_url_image(&image_url()),
        };
        let client = session.client();

        let result = match editing_id() {
            Some(id) => save
                .run(async { client.update_award(&id, &draft).await })
                .await
                .map(|_| "Award updated"),
            None => save
                .run(async { client.create_award(&draft).await })
                .await
                .map(|_| "Award created"),
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
        match remove.run(async { client.delete_award(&id).await }).await {
            Ok(()) => {
                toast_success(&mut toasts, "Award deleted");
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
                title: "Awards",
                subtitle: "Manage awards and recognitions",
                button {
                    class: "primary with-icon",
                    onclick: move |_| {
                        reset_form();
                        modal_open.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Award"
                }
            }

            div {
                class: "card",
                if list.loading() {
                    SpinnerInline {}
                } else if let Some(error) = list.error() {
                    div { class: "table-empty", "{error}" }
                } else if list.items().is_empty() {
                    div { class: "table-empty", "No awards yet." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Organization" }
                                th { "Category" }
                                th { "Year" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for award in list.items() {
                                tr {
                                    key: "{award.id}",
                                    td {
                                        class: "cell-primary",
                                        if !award.image.url.is_empty() {
                                            img { class: "cell-thumb", src: "{award.image.url}", alt: "" }
                                        }
                                        "{award.title}"
                                    }
                                    td { "{award.organization}" }
                                    td { "{award.category}" }
                                    td { "{award.year}" }
                                    td {
                                        StatusBadge {
                                            status: if award.is_active { "active" } else { "inactive" },
                                        }
                                    }
                                    td {
                                        class: "row-actions",
                                        button {
                                            class: "icon-button",
                                            title: "Edit",
                                            onclick: {
                                                let award = award.clone();
                                                move |_| open_edit(award.clone())
                                            },
                                            Icon { icon: FaPen, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-button danger",
                                            title: "Delete",
                                            onclick: {
                                                let id = award.id.clone();
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
                        h2 { if editing_id().is_some() { "Edit Award" } else { "Add Award" } }

                        div {
                            class: "form-field",
                            label { r#for: "award-title", "Title" }
                            input {
                                id: "award-title",
                                r#type: "text",
                                value: title(),
                                oninput: move |evt| title.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "award-organization", "Organization" }
                                input {
                                    id: "award-organization",
                                    r#type: "text",
                                    value: organization(),
                                    oninput: move |evt| organization.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "award-year", "Year" }
                                input {
                                    id: "award-year",
                                    r#type: "number",
                                    min: "1990",
                                    max: "2100",
                                    value: "{year()}",
                                    oninput: move |evt| {
                                        if let Ok(v) = evt.value().parse::<i32>() {
                                            year.set(v);
                                        }
                                    },
                                }
                            }
                        }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "award-category", "Category" }
                                input {
                                    id: "award-category",
                                    r#type: "text",
                                    value: category(),
                                    oninput: move |evt| category.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "award-rank", "Rank" }
                                input {
                                    id: "award-rank",
                                    r#type: "text",
                                    placeholder: "e.g. winner, finalist",
                                    value: rank(),
                                    oninput: move |evt| rank.set(evt.value()),
                                }
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "award-description", "Description" }
                            textarea {
                                id: "award-description",
                                rows: 3,
                                value: description(),
                                oninput: move |evt| description.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "award-image", "Image" }
                            input {
                                id: "award-image",
                                r#type: "file",
                                accept: "image/*",
                                onchange: handle_image,
                            }
                            if !image_url().is_empty() {
                                img { class: "image-preview", src: "{image_url()}", alt: "Preview" }
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
                    title: "Delete award",
                    message: "Are you sure you want to delete this award?",
                    busy: remove.loading(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting_id.set(None),
                }
            }
        }
    }
}
