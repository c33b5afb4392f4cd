mod instrument;
mod placeable;

pub use instrument::{CalibrateInstrument, Props as CalibrateInstrumentProps};
pub use placeable::{Placeable, Props as PlaceableProps};
