pub mod trainings;
