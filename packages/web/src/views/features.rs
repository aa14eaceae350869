use api::{Feature, FeatureDraft};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaPlus, FaTrash};
use dioxus_free_icons::Icon;

use ui::{
    data_url_image, read_file_as_data_url, toast_error, toast_success, use_mutation,
    use_paginated_list, use_session, use_toasts, ConfirmDialog, ModalOverlay, PageHeader,
    PaginationControl, SpinnerInline, StatusBadge,
};

const PAGE_SIZE: u32 = 10;

/// Split a comma-separated benefits field into clean entries.
fn parse_benefits(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn Features() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut page = use_signal(|| 1u32);
    let mut list = use_paginated_list(page.into(), PAGE_SIZE, move |p, l| {
        let client = session.client();
        async move { client.list_features(p, l).await }
    });

    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut deleting_id = use_signal(|| Option::<String>::None);
    let mut save = use_mutation();
    let mut remove = use_mutation();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut icon_name = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut benefits = use_signal(String::new);
    let mut is_active = use_signal(|| true);
    let mut image_url = use_signal(String::new);

    let mut reset_form = move || {
        title.set(String::new());
        description.set(String::new());
        icon_name.set(String::new());
        category.set(String::new());
        benefits.set(String::new());
        is_active.set(true);
        image_url.set(String::new());
        editing_id.set(None);
    };

    let mut open_edit = move |feature: Feature| {
        title.set(feature.title);
        description.set(feature.description);
        icon_name.set(feature.icon);
        category.set(feature.category);
        benefits.set(feature.benefits.join(", "));
        is_active.set(feature.is_active);
        image_url.set(feature.image.url);
        editing_id.set(Some(feature.id));
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
            toast_error(&mut toasts, "Feature title is required");
            return;
        }

        let draft = FeatureDraft {
            title: title(),
            description: description(),
            icon: icon_name(),
            category: category(),
            is_active: is_active(),
            benefits: parse_benefits(&benefits()),
            image: data_url_image(&image_url()),
        };
        let client = session.client();

        let result = match editing_id() {
            Some(id) => save
                .run(async { client.update_feature(&id, &draft).await })
                .await
                .map(|_| "Feature updated"),
            None => save
                .run(async { client.create_feature(&draft).await })
                .await
                .map(|_| "Feature created"),
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
        match remove.run(async { client.delete_feature(&id).await }).await {
            Ok(()) => {
                toast_success(&mut toasts, "Feature deleted");
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
                title: "Features",
                subtitle: "Manage the feature highlights",
                button {
                    class: "primary with-icon",
                    onclick: move |_| {
                        reset_form();
                        modal_open.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Feature"
                }
            }

            div {
                class: "card",
                if list.loading() {
                    SpinnerInline {}
                } else if let Some(error) = list.error() {
                    div { class: "table-empty", "{error}" }
                } else if list.items().is_empty() {
                    div { class: "table-empty", "No features yet." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Category" }
                                th { "Benefits" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for feature in list.items() {
                                tr {
                                    key: "{feature.id}",
                                    td { class: "cell-primary", "{feature.title}" }
                                    td { "{feature.category}" }
                                    td {
                                        class: "cell-muted",
                                        {feature.benefits.join(", ")}
                                    }
                                    td {
                                        StatusBadge {
                                            status: if feature.is_active { "active" } else { "inactive" },
                                        }
                                    }
                                    td {
                                        class: "row-actions",
                                        button {
                                            class: "icon-button",
                                            title: "Edit",
                                            onclick: {
                                                let feature = feature.clone();
                                                move |_| open_edit(feature.clone())
                                            },
                                            Icon { icon: FaPen, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-button danger",
                                            title: "Delete",
                                            onclick: {
                                                let id = feature.id.clone();
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
                        h2 { if editing_id().is_some() { "Edit Feature" } else { "Add Feature" } }

                        div {
                            class: "form-field",
                            label { r#for: "feature-title", "Title" }
                            input {
                                id: "feature-title",
                                r#type: "text",
                                value: title(),
                                oninput: move |evt| title.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "feature-description", "Description" }
                            textarea {
                                id: "feature-description",
                                rows: 3,
                                value: description(),
                                oninput: move |evt| description.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "feature-icon", "Icon name" }
                                input {
                                    id: "feature-icon",
                                    r#type: "text",
                                    placeholder: "e.g. rocket",
                                    value: icon_name(),
                                    oninput: move |evt| icon_name.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "feature-category", "Category" }
                                input {
                                    id: "feature-category",
                                    r#type: "text",
                                    value: category(),
                                    oninput: move |evt| category.set(evt.value()),
                                }
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "feature-benefits", "Benefits (comma-separated)" }
                            input {
                                id: "feature-benefits",
                                r#type: "text",
                                placeholder: "Fast, Secure, Scalable",
                                value: benefits(),
                                oninput: move |evt| benefits.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "feature-image", "Image" }
                            input {
                                id: "feature-image",
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
                    title: "Delete feature",
                    message: "Are you sure you want to delete this feature?",
                    busy: remove.loading(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting_id.set(None),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_benefits;

    #[test]
    fn test_parse_benefits() {
        assert_eq!(
            parse_benefits("Fast, Secure , Scalable"),
            vec!["Fast", "Secure", "Scalable"]
        );
        assert!(parse_benefits("  ").is_empty());
        assert_eq!(parse_benefits("One"), vec!["One"]);
    }
}
