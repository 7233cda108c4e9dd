//! Ingredient tags. They carry no behaviour beyond identity and display.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bread {
    WhiteBread,
    WheatBread,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Veggie {
    Tomato,
    Onion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meat {
    TaiwanChicken,
    Tenderloin,
    Turkey,
    Bacon,
}

impl Display for Bread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Bread::WhiteBread => "WhiteBread",
            Bread::WheatBread => "WheatBread",
        })
    }
}

impl Display for Veggie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Veggie::Tomato => "Tomato",
            Veggie::Onion => "Onion",
        })
    }
}

impl Display for Meat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Meat::TaiwanChicken => "TaiwanChicken",
            Meat::Tenderloin => "Tenderloin",
            Meat::Turkey => "Turkey",
            Meat::Bacon => "Bacon",
        })
    }
}
