//! Use-Cases der Application-Layer-Orchestrierung.

pub mod selection;
