//! Colorbrowser UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The whole browser UI is a single internal page rendered as HTML/CSS/JS
//! inside the WebView; the Rust side pushes view trees as JSON and receives
//! user actions over wry IPC.

pub mod webview_app;
