use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Element, Length, Task};
use std::collections::HashMap;
use storefront_core::{CatalogFetchResult, CatalogSession, Product};

// Constants for product thumbnail dimensions in the page region
const PRODUCT_IMAGE_WIDTH: f32 = 110.0;
const PRODUCT_IMAGE_HEIGHT: f32 = 110.0;

#[derive(Debug, Clone)]
pub enum Message {
    CatalogFetched(Result<CatalogFetchResult, String>),

    // Page navigation
    NextPage,
    PrevPage,
    JumpToPage(usize),

    // Background image loading for the visible slice
    ProductImageLoaded(u64, Result<Vec<u8>, String>),
}

pub struct AppState {
    session: CatalogSession,
    // Session-memory image store keyed by product id
    product_images: HashMap<u64, image::Handle>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: CatalogSession::new(),
            product_images: HashMap::new(),
        }
    }
}

pub fn initialize() -> (AppState, Task<Message>) {
    // The one catalog fetch of the session, fire-and-forget; the result
    // comes back as a message into the session context.
    (
        AppState::new(),
        Task::perform(
            async {
                storefront_core::load_catalog()
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::CatalogFetched,
        ),
    )
}

/// Request image bytes for visible products that are not in the store yet.
fn load_visible_images(state: &AppState) -> Task<Message> {
    let mut tasks = Vec::new();
    for product in state.session.visible_products() {
        if state.product_images.contains_key(&product.id) {
            continue;
        }
        let Some(url) = product.primary_image() else {
            continue; // stays on the placeholder
        };
        let id = product.id;
        let url = url.to_string();
        tasks.push(Task::perform(
            async move {
                storefront_core::load_image_bytes(&url)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Message::ProductImageLoaded(id, result),
        ));
    }
    Task::batch(tasks)
}

pub fn update(state: &mut AppState, message: Message) -> Task<Message> {
    match message {
        Message::CatalogFetched(result) => {
            state.session.apply_fetch_result(result);
            return load_visible_images(state);
        }
        Message::NextPage => {
            // The Next button is disabled at the end; the operation itself
            // does not clamp.
            state.session.next_page();
            return load_visible_images(state);
        }
        Message::PrevPage => {
            state.session.prev_page();
            return load_visible_images(state);
        }
        Message::JumpToPage(page) => {
            state.session.jump_to_page(page);
            return load_visible_images(state);
        }
        Message::ProductImageLoaded(id, result) => match result {
            Ok(bytes) => {
                state
                    .product_images
                    .insert(id, image::Handle::from_bytes(bytes));
            }
            Err(e) => {
                log::warn!("Failed to load image for product {}: {}", id, e);
            }
        },
    }
    Task::none()
}

pub fn view(state: &AppState) -> Element<'_, Message> {
    if state.session.is_loading() {
        return container(text("Loading...").size(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    // An error replaces the whole view; no partial rendering next to it.
    if let Some(error) = state.session.error_message() {
        return container(text(error.to_string()).size(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let heading = text("Products").size(28);

    let product_rows: Vec<Element<Message>> = state
        .session
        .visible_products()
        .iter()
        .map(|product| product_row(state, product))
        .collect();
    let page_region = column(product_rows).spacing(10);

    let status = text(format!(
        "Showing {} of {} products, fetched at {}",
        state.session.products().len(),
        state.session.total_available().unwrap_or(0),
        state
            .session
            .fetched_at()
            .and_then(|t| t.format(&time::format_description::well_known::Rfc3339).ok())
            .unwrap_or_else(|| "unknown time".to_string()),
    ))
    .size(12);

    let content = column![heading, page_region, control_strip(state), status]
        .spacing(20)
        .padding(20);

    scrollable(content).into()
}

fn product_row<'a>(state: &'a AppState, product: &'a Product) -> Element<'a, Message> {
    let image_widget: Element<Message> =
        if let Some(handle) = state.product_images.get(&product.id) {
            image::Image::<image::Handle>::new(handle.clone())
                .width(Length::Fixed(PRODUCT_IMAGE_WIDTH))
                .height(Length::Fixed(PRODUCT_IMAGE_HEIGHT))
                .into()
        } else {
            // Placeholder until bytes arrive, or permanently for imageless products
            let placeholder = if product.primary_image().is_some() {
                "Loading..."
            } else {
                "No image"
            };
            container(text(placeholder).size(12))
                .width(Length::Fixed(PRODUCT_IMAGE_WIDTH))
                .height(Length::Fixed(PRODUCT_IMAGE_HEIGHT))
                .center_x(Length::Fixed(PRODUCT_IMAGE_WIDTH))
                .center_y(Length::Fixed(PRODUCT_IMAGE_HEIGHT))
                .into()
        };

    row![
        image_widget,
        column![
            text(product.title.as_str()).size(16),
            text(format!("${}", product.price)).size(16),
        ]
        .spacing(5),
    ]
    .spacing(15)
    .into()
}

fn control_strip(state: &AppState) -> Element<'_, Message> {
    let mut controls: Vec<Element<Message>> = Vec::new();

    controls.push(
        button("Prev")
            .on_press_maybe(if state.session.can_go_prev() {
                Some(Message::PrevPage)
            } else {
                None
            })
            .padding(5)
            .into(),
    );

    for page in state.session.page_numbers() {
        controls.push(
            button(text(page.to_string()).size(14))
                .on_press_maybe(if page == state.session.current_page() {
                    None
                } else {
                    Some(Message::JumpToPage(page))
                })
                .padding(5)
                .into(),
        );
    }

    controls.push(
        button("Next")
            .on_press_maybe(if state.session.can_go_next() {
                Some(Message::NextPage)
            } else {
                None
            })
            .padding(5)
            .into(),
    );

    row(controls).spacing(10).into()
}
