// Offer extraction from a product page's embedded data blob

use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::debug;

use crate::models::{Product, StoreRegistry};
use crate::utils::error::{CartError, Result};

// Shape of the JSON carried by the page's __NEXT_DATA__ script element;
// only the fields we read are modelled
#[derive(Debug, Deserialize)]
struct PageData {
    props: Props,
}

#[derive(Debug, Deserialize)]
struct Props {
    #[serde(rename = "pageProps")]
    page_props: PageProps,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    #[serde(rename = "productPage")]
    product_page: ProductPage,
}

#[derive(Debug, Deserialize)]
struct ProductPage {
    product: ProductData,
}

#[derive(Debug, Deserialize)]
struct ProductData {
    name: String,
    offers: Vec<OfferData>,
}

#[derive(Debug, Deserialize)]
struct OfferData {
    #[serde(rename = "storeName")]
    store_name: String,
    price: f64,
    shipping: ShippingData,
}

#[derive(Debug, Deserialize)]
struct ShippingData {
    #[serde(rename = "minimumPrice")]
    minimum_price: f64,
}

/// Pulls the embedded offer JSON out of a product page
fn embedded_offer_json(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("script#__NEXT_DATA__").map_err(|e| CartError::PageFormat {
            message: format!("invalid selector: {e}"),
        })?;

    let script = document
        .select(&selector)
        .next()
        .ok_or_else(|| CartError::PageFormat {
            message: "no __NEXT_DATA__ script element in page".to_string(),
        })?;

    Ok(script.text().collect())
}

/// Builds a product from a fetched page, interning every offer's store.
///
/// Offers are attached in page order. A store name seen on an earlier page
/// merges into the existing registry entry, keeping the lowest shipping
/// quote observed across pages.
pub fn product_from_page(
    html: &str,
    quantity: u32,
    registry: &mut StoreRegistry,
) -> Result<Product> {
    let json = embedded_offer_json(html)?;
    let data: PageData = serde_json::from_str(&json)?;
    let page_product = data.props.page_props.product_page.product;

    let mut product = Product::new(page_product.name, quantity);
    for offer in page_product.offers {
        let store = registry.intern(&offer.store_name, offer.shipping.minimum_price);
        product.add_offer(store, offer.price);
    }

    debug!(
        "extracted {} offers for {}",
        product.offer_count(),
        product.name
    );
    Ok(product)
}
