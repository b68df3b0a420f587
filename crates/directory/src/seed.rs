//! Built-in directory entries loaded into every new session.

use crate::model::{Category, Contact};

/// A seed entry: name, phone number, category.
pub type SeedEntry = (&'static str, &'static str, Category);

/// The built-in list, in its original order. Display order is derived from
/// it by the filter, this slice is never re-sorted or mutated.
pub const SEED: &[SeedEntry] = &[
    ("Fire Department", "101", Category::Emergency),
    ("Police", "100", Category::Emergency),
    ("Ambulance", "102", Category::Emergency),
    ("Child Helpline", "1098", Category::TollFree),
    ("Women Helpline", "181", Category::TollFree),
    ("Disaster Management", "1078", Category::TollFree),
    ("Medical Emergency", "108", Category::TollFree),
    ("Railway Helpline", "139", Category::TollFree),
    ("Anti-Poison Helpline", "1066", Category::TollFree),
    ("Senior Citizen Helpline", "1291", Category::TollFree),
    ("Road Accident Emergency", "1073", Category::TollFree),
    ("Electricity Emergency", "1912", Category::TollFree),
    ("Gas Leak Emergency", "1906", Category::TollFree),
    ("National Consumer Helpline", "1800-11-4000", Category::TollFree),
    ("COVID-19 Helpline", "1075", Category::TollFree),
    ("Women in Distress", "1091", Category::TollFree),
    ("AIDS Helpline", "1097", Category::TollFree),
    ("Earthquake Helpline", "1092", Category::TollFree),
    ("Tourist Helpline", "1363", Category::TollFree),
    ("Railway Accident Emergency", "1072", Category::TollFree),
];

/// Materialize the seed list as fresh contacts (new ids on every call).
pub fn seed_contacts() -> impl Iterator<Item = Contact> {
    SEED.iter()
        .map(|(name, number, category)| Contact::new(*name, *number, *category))
}
