//! Defense formulas - Armor, Life, Resistances, Effective Health

mod armor;
mod ehp;
mod life;
mod resistance;

pub use armor::{armor, armor_reduction};
pub use ehp::{damage_taken, effective_health};
pub use life::life;
pub use resistance::{resist_all, resist_reduction, resistances, ResistType};
