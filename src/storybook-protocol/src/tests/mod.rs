//! Tests for storybook-protocol
