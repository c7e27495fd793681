//! Menu catalog
//!
//! Two fixed data sets:
//!
//! - [`PRE_ORDER_CATALOG`]: the static six-item list the pre-order
//!   workflow prices against. Pre-order totals are always computed from
//!   this list, never from the live menu collection.
//! - The nine-item menu served by `GET /menu`, written into the `menu`
//!   collection on first startup.

use shared::models::MenuItem;
use shared::util::record_id;

use crate::store::{self, RecordStore, StoreResult};

/// A priced entry of the static pre-order catalog
#[derive(Debug, Clone, Copy)]
pub struct CatalogItem {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub category: &'static str,
}

/// Static catalog backing pre-order totals
pub const PRE_ORDER_CATALOG: [CatalogItem; 6] = [
    CatalogItem {
        id: "1",
        name: "Spaghetti Carbonara",
        price: 18.0,
        category: "Italian",
    },
    CatalogItem {
        id: "2",
        name: "Margherita Pizza",
        price: 16.0,
        category: "Italian",
    },
    CatalogItem {
        id: "3",
        name: "Chicken Biryani",
        price: 15.0,
        category: "Pakistani",
    },
    CatalogItem {
        id: "4",
        name: "Seekh Kabab",
        price: 14.0,
        category: "Pakistani",
    },
    CatalogItem {
        id: "5",
        name: "Dim Sum Platter",
        price: 16.0,
        category: "Chinese",
    },
    CatalogItem {
        id: "6",
        name: "Kung Pao Chicken",
        price: 17.0,
        category: "Chinese",
    },
];

/// The fixed menu list served by `GET /menu`
///
/// Fresh record IDs are assigned at seed time, so a wiped database gets
/// new IDs on the next startup.
pub fn menu_seed_items() -> Vec<MenuItem> {
    let seed = |name: &str, price: f64, image: &str, category: &str, description: &str| MenuItem {
        id: record_id(),
        name: name.to_string(),
        price,
        image: image.to_string(),
        category: category.to_string(),
        description: description.to_string(),
    };

    vec![
        seed(
            "Spaghetti Carbonara",
            18.0,
            "spagheti.jpg",
            "italian",
            "Classic Italian pasta with creamy sauce and bacon.",
        ),
        seed(
            "Margherita Pizza",
            16.0,
            "margherita.jpg",
            "italian",
            "Traditional pizza with tomatoes, mozzarella, and basil.",
        ),
        seed(
            "Risotto ai Funghi",
            20.0,
            "risotto.jpg",
            "italian",
            "Creamy mushroom risotto with parmesan cheese.",
        ),
        seed(
            "Chicken Biryani",
            15.0,
            "pakistani1.jpg",
            "pakistani",
            "Aromatic chicken biryani cooked with spices and rice.",
        ),
        seed(
            "Nihari",
            18.0,
            "pakistani2.jpg",
            "pakistani",
            "Slow-cooked beef stew, rich in flavor and spices.",
        ),
        seed(
            "Seekh Kabab",
            14.0,
            "pakistani3.jpg",
            "pakistani",
            "Spiced minced meat grilled to perfection.",
        ),
        seed(
            "Dim Sum Platter",
            16.0,
            "chinese1.jpg",
            "chinese",
            "Variety of steamed dumplings and buns.",
        ),
        seed(
            "Kung Pao Chicken",
            17.0,
            "chinese2.jpg",
            "chinese",
            "Spicy stir-fried chicken with peanuts and vegetables.",
        ),
        seed(
            "Peking Duck",
            35.0,
            "chinese3.jpg",
            "chinese",
            "Crispy roasted duck served with pancakes and sauce.",
        ),
    ]
}

/// Seed the `menu` collection if it is empty
///
/// Returns the number of items written (0 when the collection already
/// holds data). Safe to call on every startup.
pub fn ensure_menu_seeded(store: &RecordStore) -> StoreResult<usize> {
    let existing: Vec<MenuItem> = store.load_all(store::MENU)?;
    if !existing.is_empty() {
        return Ok(0);
    }

    let items = menu_seed_items();
    store.save_all(store::MENU, &items)?;
    Ok(items.len())
}
