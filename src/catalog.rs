//! # Predefined message catalog.
//!
//! Maps built-in [`Category`] values to ready-to-speak messages in the
//! supported locales, plus a dynamic template for speed-excess alerts.
//! Custom categories have no predefined text and fall back to their
//! description.
//!
//! ## Example
//! ```rust
//! use voicegate::{catalog, Category, MessageLocale};
//!
//! let msg = catalog::message(&Category::HarshBraking, MessageLocale::English);
//! assert_eq!(msg, "Harsh braking detected. Drive carefully.");
//! ```

use serde::{Deserialize, Serialize};

use crate::alerts::Category;

/// Language of predefined catalog messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageLocale {
    /// Spanish (es-ES).
    Spanish,
    /// English.
    English,
}

/// Returns the predefined message for a category in the given locale.
///
/// Categories without predefined text (notably [`Category::Custom`]) fall
/// back to [`Category::description`].
pub fn message(category: &Category, locale: MessageLocale) -> String {
    let predefined = match (category, locale) {
        (Category::SpeedExcess, MessageLocale::Spanish) => {
            Some("Atención, exceso de velocidad detectado. Reduzca la velocidad.")
        }
        (Category::HarshBraking, MessageLocale::Spanish) => {
            Some("Frenada brusca detectada. Conduzca con precaución.")
        }
        (Category::HarshAcceleration, MessageLocale::Spanish) => {
            Some("Aceleración brusca detectada. Acelere gradualmente.")
        }
        (Category::SharpTurn, MessageLocale::Spanish) => {
            Some("Giro brusco detectado. Reduzca la velocidad en las curvas.")
        }
        (Category::SpeedExcess, MessageLocale::English) => {
            Some("Attention, speed limit exceeded. Please reduce speed.")
        }
        (Category::HarshBraking, MessageLocale::English) => {
            Some("Harsh braking detected. Drive carefully.")
        }
        (Category::HarshAcceleration, MessageLocale::English) => {
            Some("Harsh acceleration detected. Accelerate gradually.")
        }
        (Category::SharpTurn, MessageLocale::English) => {
            Some("Sharp turn detected. Reduce speed on curves.")
        }
        (Category::Custom(_), _) => None,
    };
    predefined
        .map(str::to_string)
        .unwrap_or_else(|| category.description())
}

/// Renders the dynamic speed-excess message with current and limit values.
pub fn speed_excess_message(current_kmh: u32, limit_kmh: u32, locale: MessageLocale) -> String {
    match locale {
        MessageLocale::Spanish => format!(
            "Atención, está conduciendo a {current_kmh} kilómetros por hora. El límite es {limit_kmh}."
        ),
        MessageLocale::English => format!(
            "Attention, you are driving at {current_kmh} kilometers per hour. The limit is {limit_kmh}."
        ),
    }
}
