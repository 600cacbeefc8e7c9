// Scenario suites for the detection core

mod detection_tests;
