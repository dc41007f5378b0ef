//! End-to-end checks of `clientele-core` against JSON files on disk.

mod fixtures;
mod loading;
mod scenario;
