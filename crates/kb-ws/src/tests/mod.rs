mod broadcast;
mod property_tests;
