// Presentation layer: renders simulation reports for the command-line front ends.

pub mod report;
