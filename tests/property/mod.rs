// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! This module contains property-based tests using proptest to verify
//! laws of the execute, map, and confirm-filter operators.

mod operator_laws;
