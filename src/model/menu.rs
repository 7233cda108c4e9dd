//! The two menus a customer chooses from: where to eat and what to eat.

closed_choice! {
    /// A shop location. Each shop offers its own subset of [`BurgerKind`]s.
    pub enum Shop as "Shop" {
        Taipei = 1,
        NewYork = 2,
        Tokyo = 3,
    }
}

closed_choice! {
    /// A category of burger, which may or may not be offered by a given [`Shop`].
    pub enum BurgerKind as "BurgerKind" {
        Chicken = 1,
        Pork = 2,
    }
}
