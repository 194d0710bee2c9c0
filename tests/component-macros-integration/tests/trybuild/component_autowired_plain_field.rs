use component_macros::Component;

#[derive(Default, Component)]
pub struct Checkout {
    #[autowired]
    items: Vec<String>,
}

fn main() {
    let checkout = Checkout::default();
    let _ = checkout.items.len();
}
