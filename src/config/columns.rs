//! Column names of the `products` table.
//!
//! These are the only columns read by the exporter, in the order they appear
//! in each exported record. Anything else in the table (e.g. `scraped_at`)
//! stays out of the document.

// Identity and descriptive attributes
/// Primary key
pub const COL_ID: &str = "id";
/// Display name
pub const COL_NAME: &str = "name";
/// Manufacturer, one of the `meta.brands` facets
pub const COL_BRAND: &str = "brand";
/// Catalog category
pub const COL_CATEGORY: &str = "category";
/// Manufacturer model number
pub const COL_MODEL_NUMBER: &str = "model_number";
/// Fuel type, one of the `meta.fuel_types` facets
pub const COL_FUEL_TYPE: &str = "fuel_type";

// Pricing
/// Current price; sort key and source of the price range
pub const COL_PRICE_CURRENT: &str = "price_current";
/// List price
pub const COL_PRICE_RETAIL: &str = "price_retail";
/// Sale price
pub const COL_PRICE_SALE: &str = "price_sale";
/// Display string for the current price
pub const COL_PRICE_FORMATTED: &str = "price_formatted";
/// Display string for the list price
pub const COL_RETAIL_FORMATTED: &str = "retail_formatted";
/// Display string for the savings amount
pub const COL_SAVINGS_FORMATTED: &str = "savings_formatted";
/// Display string for the savings percentage
pub const COL_SAVINGS_PERCENT: &str = "savings_percent";

// Links
/// Product image URL
pub const COL_IMAGE_URL: &str = "image_url";
/// Product page URL
pub const COL_PRODUCT_URL: &str = "product_url";

// Social proof
/// Average review rating
pub const COL_RATING: &str = "rating";
/// Number of reviews
pub const COL_REVIEW_COUNT: &str = "review_count";

// Long-form text
/// Long-form description
pub const COL_DESCRIPTION: &str = "description";
/// JSON-encoded list of strings
pub const COL_BULLET_POINTS: &str = "bullet_points";

// Availability
/// Stock status text
pub const COL_STOCK_STATUS: &str = "stock_status";
/// Shipping lead time text
pub const COL_SHIPS_IN: &str = "ships_in";
/// Stored as integer 0/1
pub const COL_IS_FREE_SHIPPING: &str = "is_free_shipping";
/// Product video URL
pub const COL_VIDEO_URL: &str = "video_url";

/// Projection used by the export query.
/// To add/remove exported columns, modify this array and `ProductRecord`.
pub const PRODUCT_COLUMNS: &[&str] = &[
    COL_ID,
    COL_NAME,
    COL_BRAND,
    COL_CATEGORY,
    COL_MODEL_NUMBER,
    COL_FUEL_TYPE,
    COL_PRICE_CURRENT,
    COL_PRICE_RETAIL,
    COL_PRICE_SALE,
    COL_PRICE_FORMATTED,
    COL_RETAIL_FORMATTED,
    COL_SAVINGS_FORMATTED,
    COL_SAVINGS_PERCENT,
    COL_IMAGE_URL,
    COL_PRODUCT_URL,
    COL_RATING,
    COL_REVIEW_COUNT,
    COL_DESCRIPTION,
    COL_BULLET_POINTS,
    COL_STOCK_STATUS,
    COL_SHIPS_IN,
    COL_IS_FREE_SHIPPING,
    COL_VIDEO_URL,
];
