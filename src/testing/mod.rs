pub mod random_inputs;
