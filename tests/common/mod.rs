pub mod synthetic_gradients;
