pub mod item;
pub mod locale;
pub mod persistence;
pub mod schedule;

pub use item::ScheduleItem;
pub use locale::Locale;
pub use persistence::{
    PersistenceError, PersistenceResult, load_items_from_csv, load_items_from_json,
    save_items_to_csv, save_items_to_json,
};
pub use schedule::Schedule;
