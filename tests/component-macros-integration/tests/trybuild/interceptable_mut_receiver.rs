use component_macros::interceptable;

#[interceptable]
pub trait Counter: Send + Sync {
    fn increment(&mut self);
}

fn main() {}
