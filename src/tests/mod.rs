// Test modules for PairPad
// Each module exercises one layer: the stores, the auth and messaging
// flows, and the TUI state machine

mod messaging_tests;
mod store_tests;
mod tui_tests;
