use api::{Product, ProductDraft};
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
pub fn Products() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();
    let mut page = use_signal(|| 1u32);
    let mut list = use_paginated_list(page.into(), PAGE_SIZE, move |p, l| {
        let client = session.client();
        async move { client.list_products(p, l).await }
    });

    let mut modal_open = use_signal(|| false);
    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut deleting_id = use_signal(|| Option::<String>::None);
    let mut save = use_mutation();
    let mut remove = use_mutation();

    // Draft fields
    let mut name = use_signal(String::new);
    let mut short_description = use_signal(String::new);
    let mut full_description = use_signal(String::new);
    let mut category = use_signal(|| "web-app".to_string());
    let mut price = use_signal(|| "custom".to_string());
    let mut is_featured = use_signal(|| false);
    let mut image_url = use_signal(String::new);

    let mut reset_form = move || {
        name.set(String::new());
        short_description.set(String::new());
        full_description.set(String::new());
        category.set("web-app".to_string());
        price.set("custom".to_string());
        is_featured.set(false);
        image_url.set(String::new());
        editing_id.set(None);
    };

    let mut open_edit = move |product: Product| {
        name.set(product.name);
        short_description.set(product.short_description);
        full_description.set(product.full_description);
        category.set(product.category);
        price.set(product.price);
        is_featured.set(product.is_featured);
        image_url.set(product.main_image.url);
        editing_id.set(Some(product.id));
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
        if name().trim().is_empty() {
            toast_error(&mut toasts, "Product name is required");
            return;
        }

        let draft = ProductDraft {
            name: name(),
            short_description: short_description(),
            full_description: full_description(),
            category: category(),
            price: price(),
            is_featured: is_featured(),
            main_image: data_url_image(&image_url()),
        };
        let client = session.client();

        let result = match editing_id() {
            Some(id) => save
                .run(async { client.update_product(&id, &draft).await })
                .await
                .map(|_| "Product updated"),
            None => save
                .run(async { client.create_product(&draft).await })
                .await
                .map(|_| "Product created"),
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
        match remove.run(async { client.delete_product(&id).await }).await {
            Ok(()) => {
                toast_success(&mut toasts, "Product deleted");
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
                title: "Products",
                subtitle: "Manage your software products",
                button {
                    class: "primary with-icon",
                    onclick: move |_| {
                        reset_form();
                        modal_open.set(true);
                    },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add Product"
                }
            }

            div {
                class: "card",
                if list.loading() {
                    SpinnerInline {}
                } else if let Some(error) = list.error() {
                    div { class: "table-empty", "{error}" }
                } else if list.items().is_empty() {
                    div { class: "table-empty", "No products yet." }
                } else {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Category" }
                                th { "Price" }
                                th { "Status" }
                                th { "Featured" }
                                th { "" }
                            }
                        }
                        tbody {
                            for product in list.items() {
                                tr {
                                    key: "{product.id}",
                                    td {
                                        class: "cell-primary",
                                        if !product.main_image.url.is_empty() {
                                            img { class: "cell-thumb", src: "{product.main_image.url}", alt: "" }
                                        }
                                        "{product.name}"
                                    }
                                    td { "{product.category}" }
                                    td { "{product.price}" }
                                    td { StatusBadge { status: product.status.clone() } }
                                    td { if product.is_featured { "Yes" } else { "-" } }
                                    td {
                                        class: "row-actions",
                                        button {
                                            class: "icon-button",
                                            title: "Edit",
                                            onclick: {
                                                let product = product.clone();
                                                move |_| open_edit(product.clone())
                                            },
                                            Icon { icon: FaPen, width: 14, height: 14 }
                                        }
                                        button {
                                            class: "icon-button danger",
                                            title: "Delete",
                                            onclick: {
                                                let id = product.id.clone();
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
                        h2 { if editing_id().is_some() { "Edit Product" } else { "Add New Product" } }

                        div {
                            class: "form-field",
                            label { r#for: "product-name", "Name" }
                            input {
                                id: "product-name",
                                r#type: "text",
                                placeholder: "Product name",
                                value: name(),
                                oninput: move |evt| name.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "product-short", "Short description" }
                            input {
                                id: "product-short",
                                r#type: "text",
                                value: short_description(),
                                oninput: move |evt| short_description.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "product-full", "Full description" }
                            textarea {
                                id: "product-full",
                                rows: 4,
                                value: full_description(),
                                oninput: move |evt| full_description.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-row",
                            div {
                                class: "form-field",
                                label { r#for: "product-category", "Category" }
                                select {
                                    id: "product-category",
                                    value: category(),
                                    onchange: move |evt| category.set(evt.value()),
                                    option { value: "web-app", "Web app" }
                                    option { value: "mobile-app", "Mobile app" }
                                    option { value: "desktop-app", "Desktop app" }
                                    option { value: "library", "Library" }
                                    option { value: "other", "Other" }
                                }
                            }
                            div {
                                class: "form-field",
                                label { r#for: "product-price", "Price" }
                                input {
                                    id: "product-price",
                                    r#type: "text",
                                    value: price(),
                                    oninput: move |evt| price.set(evt.value()),
                                }
                            }
                        }

                        div {
                            class: "form-field",
                            label { r#for: "product-image", "Main image" }
                            input {
                                id: "product-image",
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
                                checked: is_featured(),
                                onchange: move |evt| is_featured.set(evt.checked()),
                            }
                            "Featured product"
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
                    title: "Delete product",
                    message: "Are you sure you want to delete this product?",
                    busy: remove.loading(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| deleting_id.set(None),
                }
            }
        }
    }
}
