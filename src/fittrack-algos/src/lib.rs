pub mod constants;
pub mod helpers;

mod error;
pub use error::TrainingError;

pub(crate) mod calories;
pub use calories::{RunningCalories, SwimmingCalories, WalkingCalories};

pub(crate) mod training;
pub use training::{Training, TrainingDetails};

pub(crate) mod info_message;
pub use info_message::{InfoMessage, MessageLocale};

pub(crate) mod package;
pub use package::read_package;

pub use fittrack_types::trainings::{ActivityKind, TrainingPackage};
