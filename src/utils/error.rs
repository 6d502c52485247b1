use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("product \"{product}\" has no offers; the cart cannot be fulfilled")]
    NoOffers { product: String },

    #[error("page request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("embedded offer data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected page structure: {message}")]
    PageFormat { message: String },
}

pub type Result<T> = std::result::Result<T, CartError>;
