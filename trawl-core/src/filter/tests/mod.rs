mod category_tests;
mod engine_tests;
