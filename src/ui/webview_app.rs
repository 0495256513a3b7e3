//! WebView-based shell using `wry` + `tao`.
//!
//! Architecture:
//! - The single internal page is served via the `cb://` custom protocol.
//! - IPC from JS → Rust via `window.ipc.postMessage()`.
//! - Rust → JS via `evaluate_script`: view trees, theme variables, toasts
//!   and the busy splash are all pushed as JSON.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::browsers::grid_browser::GridBrowserTrait;
use crate::browsers::tab_browser::TabBrowserTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::theme_engine::ThemeEngineTrait;
use crate::shell::{deliver_copy, Clipboard, Notifier, RenderHost};
use crate::types::browse::Screen;
use crate::types::view::ViewTree;

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

/// Shell collaborator backed by the webview: everything except the
/// clipboard is delivered as JavaScript through the event-loop proxy.
struct WebShell {
    proxy: EventLoopProxy<UserEvent>,
    clipboard: Option<arboard::Clipboard>,
}

impl WebShell {
    fn new(proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            proxy,
            clipboard: arboard::Clipboard::new().ok(),
        }
    }

    fn eval(&self, js: String) {
        let _ = self.proxy.send_event(UserEvent::EvalScript(js));
    }
}

impl Clipboard for WebShell {
    fn set_clipboard(&mut self, text: &str) {
        if let Some(clipboard) = self.clipboard.as_mut() {
            let _ = clipboard.set_text(text.to_string());
        }
    }
}

impl Notifier for WebShell {
    fn notify(&mut self, message: &str) {
        self.eval(format!(
            "if(window.__cb_toast)__cb_toast({})",
            serde_json::json!(message)
        ));
    }
}

impl RenderHost for WebShell {
    fn render(&mut self, view: &ViewTree) {
        let json = serde_json::to_string(view).unwrap_or_default();
        self.eval(format!("if(window.__cb_render)__cb_render({})", json));
    }

    fn set_busy(&mut self, busy: bool) {
        self.eval(format!("if(window.__cb_busy)__cb_busy({})", busy));
    }
}

// ─── IPC handler ───

fn push_theme(app: &App, shell: &WebShell) {
    let vars = app.theme_engine.get_css_variables();
    shell.eval(format!(
        "if(window.__cb_theme)__cb_theme({})",
        serde_json::json!(vars)
    ));
}

fn push_screen(app: &App, shell: &mut WebShell) {
    let index = match app.active_screen {
        Screen::GridSearch => 0,
        Screen::TabFilter => 1,
    };
    shell.eval(format!("if(window.__cb_screen)__cb_screen({})", index));
    shell.render(&app.render_active());
}

fn handle_ipc(app: &mut App, shell: &mut WebShell, message: &str) {
    let msg: serde_json::Value = match serde_json::from_str(message) {
        Ok(v) => v,
        Err(_) => return,
    };
    let cmd = match msg.get("cmd").and_then(|v| v.as_str()) {
        Some(c) => c,
        None => return,
    };

    match cmd {
        "ui_ready" => {
            push_theme(app, shell);
            push_screen(app, shell);
        }

        "search" => {
            let term = msg.get("term").and_then(|v| v.as_str()).unwrap_or("");
            app.grid_browser.submit_query(term, shell);
        }

        "filter" => {
            let term = msg.get("term").and_then(|v| v.as_str()).unwrap_or("");
            app.tab_browser.filter(term, shell);
        }

        "copy" => {
            if let Some(text) = msg.get("text").and_then(|v| v.as_str()) {
                deliver_copy(shell, text);
            }
        }

        "switch_screen" => {
            let screen = match msg.get("index").and_then(|v| v.as_u64()) {
                Some(0) => Screen::GridSearch,
                _ => Screen::TabFilter,
            };
            app.switch_screen(screen);
            push_screen(app, shell);
        }

        "toggle_theme" => {
            app.theme_engine.toggle_theme();
            push_theme(app, shell);
        }

        _ => {}
    }
}

// ─── Internal page ───

fn page_html() -> String {
    let mut html = String::with_capacity(PAGE_CSS.len() + PAGE_BODY.len() + PAGE_JS.len() + 256);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(PAGE_CSS);
    html.push_str("</style></head><body>");
    html.push_str(PAGE_BODY);
    html.push_str("<script>");
    html.push_str(PAGE_JS);
    html.push_str("</script></body></html>");
    html
}

const PAGE_CSS: &str = r##"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Helvetica,Arial,sans-serif;
  background:var(--canvas,#ffffff);color:var(--text,#1b1c1e);height:100vh;display:flex;
  flex-direction:column;user-select:none}
.appbar{background:var(--app-bar,#2196f3);color:var(--app-bar-text,#ffffff);display:flex;
  align-items:center;justify-content:center;position:relative;height:48px;flex:none}
.appbar .title{font-size:17px;font-weight:600}
.appbar .theme-btn{position:absolute;right:10px;background:none;border:none;cursor:pointer;
  font-size:20px;color:var(--app-bar-text,#ffffff)}
.screen{flex:1;display:none;flex-direction:column;overflow:hidden;padding:10px}
.screen.active{display:flex}
.query-row{display:flex;gap:8px;flex:none;margin-bottom:10px}
.query-row input{flex:1;padding:10px 14px;border:1px solid var(--border,#d4d7db);
  border-radius:24px;background:var(--input-bg,#ffffff);color:var(--text,#1b1c1e);font-size:14px}
.query-row button{padding:10px 16px;border:none;border-radius:24px;cursor:pointer;
  background:var(--app-bar,#2196f3);color:var(--app-bar-text,#ffffff)}
.grid{flex:1;overflow-y:auto;display:grid;grid-template-columns:repeat(auto-fill,minmax(150px,1fr));
  gap:5px;align-content:start}
.grid .tile{display:flex;flex-direction:column;align-items:center;justify-content:center;
  aspect-ratio:1;border:1px solid var(--border,#d4d7db);border-radius:8px;cursor:pointer;
  background:var(--surface,#f2f4f7)}
.grid .tile .swatch{width:38px;height:38px;border-radius:4px;margin-bottom:5px}
.grid .tile .name{font-size:13px;max-width:120px;overflow:hidden;text-overflow:ellipsis;
  white-space:nowrap}
.status{flex:none;padding-top:6px;font-size:13px;color:var(--text-muted,#5c5f63)}
.tabbar{display:flex;overflow-x:auto;flex:none;border-bottom:1px solid var(--border,#d4d7db)}
.tabbar .tab{padding:10px 14px;cursor:pointer;white-space:nowrap;font-size:14px;
  color:var(--text-muted,#5c5f63);border-bottom:2px solid transparent}
.tabbar .tab.active{color:var(--app-bar,#2196f3);border-bottom-color:var(--app-bar,#2196f3)}
.tiles{flex:1;overflow-y:auto;display:flex;flex-direction:column;gap:4px;padding-top:8px}
.tiles .row{height:40px;flex:none;display:flex;align-items:center;justify-content:center;
  border-radius:6px;cursor:pointer;font-weight:700;font-style:italic;font-size:13px}
.navbar{flex:none;display:flex;border-top:1px solid var(--border,#d4d7db);
  background:var(--surface,#f2f4f7)}
.navbar button{flex:1;padding:10px;border:none;background:none;cursor:pointer;font-size:13px;
  color:var(--text-muted,#5c5f63)}
.navbar button.active{color:var(--app-bar,#2196f3);font-weight:600}
.toast{position:fixed;left:50%;bottom:70px;transform:translateX(-50%);
  background:rgba(20,20,20,0.9);color:#ffffff;padding:10px 18px;border-radius:6px;
  font-size:13px;opacity:0;transition:opacity 150ms;pointer-events:none}
.toast.show{opacity:1}
.splash{position:fixed;top:48px;left:0;right:0;height:3px;background:var(--app-bar,#2196f3);
  display:none;animation:pulse 1s infinite}
.splash.show{display:block}
@keyframes pulse{0%{opacity:0.3}50%{opacity:1}100%{opacity:0.3}}
"##;

const PAGE_BODY: &str = r##"
<div class="appbar"><span class="title">Colors Browser</span>
<button class="theme-btn" id="theme-btn" title="change theme">&#9681;</button></div>
<div class="splash" id="splash"></div>
<div class="screen" id="screen-grid">
  <div class="query-row">
    <input id="search-input" type="text" autofocus
      placeholder="Enter keyword and press search button" />
    <button id="search-btn">Search</button>
  </div>
  <div class="grid" id="grid"></div>
  <div class="status" id="status"></div>
</div>
<div class="screen" id="screen-tabs">
  <div class="query-row">
    <input id="filter-input" type="text" placeholder="Search Tabs... (enter ALL to show all)" />
    <button id="filter-btn">Apply</button>
  </div>
  <div class="tabbar" id="tabbar"></div>
  <div class="tiles" id="tiles"></div>
</div>
<div class="navbar">
  <button id="nav-0">Version 1</button>
  <button id="nav-1">Version 2</button>
</div>
<div class="toast" id="toast"></div>
"##;

const PAGE_JS: &str = r##"
var post = function(cmd, extra) {
  var msg = Object.assign({cmd: cmd}, extra || {});
  window.ipc.postMessage(JSON.stringify(msg));
};
var el = function(id) { return document.getElementById(id); };
var tabsTree = null, activeTab = 0, toastTimer = null;

window.__cb_theme = function(vars) {
  for (var key in vars) document.documentElement.style.setProperty(key, vars[key]);
};
window.__cb_toast = function(message) {
  var toast = el('toast');
  toast.textContent = message;
  toast.classList.add('show');
  if (toastTimer) clearTimeout(toastTimer);
  toastTimer = setTimeout(function() { toast.classList.remove('show'); }, 2200);
};
window.__cb_busy = function(busy) {
  el('splash').classList.toggle('show', !!busy);
};
window.__cb_screen = function(index) {
  el('screen-grid').classList.toggle('active', index === 0);
  el('screen-tabs').classList.toggle('active', index === 1);
  el('nav-0').classList.toggle('active', index === 0);
  el('nav-1').classList.toggle('active', index === 1);
};
window.__cb_render = function(tree) {
  if (tree.screen === 'grid') renderGrid(tree); else renderTabs(tree);
};

function tile(item, className) {
  var node = document.createElement('div');
  node.className = className;
  node.title = item.copy_text + '\nClick to copy to clipboard';
  node.addEventListener('click', function() { post('copy', {text: item.copy_text}); });
  return node;
}

function renderGrid(tree) {
  el('search-input').disabled = !tree.input_enabled;
  el('search-btn').disabled = !tree.input_enabled;
  el('status').textContent = tree.status;
  var grid = el('grid');
  grid.textContent = '';
  tree.items.forEach(function(item) {
    var node = tile(item, 'tile');
    var swatch = document.createElement('div');
    swatch.className = 'swatch';
    swatch.style.background = item.foreground || item.label;
    var name = document.createElement('div');
    name.className = 'name';
    name.textContent = item.label;
    name.style.color = item.foreground || '';
    node.appendChild(swatch);
    node.appendChild(name);
    grid.appendChild(node);
  });
}

function renderTabs(tree) {
  tabsTree = tree;
  if (activeTab >= tree.tabs.length) activeTab = 0;
  var bar = el('tabbar');
  bar.textContent = '';
  tree.tabs.forEach(function(tab, index) {
    var node = document.createElement('div');
    node.className = 'tab' + (index === activeTab ? ' active' : '');
    node.textContent = tab.title;
    node.addEventListener('click', function() { activeTab = index; renderTabs(tabsTree); });
    bar.appendChild(node);
  });
  var tiles = el('tiles');
  tiles.textContent = '';
  var current = tree.tabs[activeTab];
  if (!current) return;
  current.items.forEach(function(item) {
    var node = tile(item, 'row');
    node.textContent = item.label;
    node.style.background = item.background || '';
    tiles.appendChild(node);
  });
}

el('search-btn').addEventListener('click', function() {
  post('search', {term: el('search-input').value});
});
el('search-input').addEventListener('keydown', function(e) {
  if (e.key === 'Enter') post('search', {term: e.target.value});
});
el('filter-btn').addEventListener('click', function() {
  post('filter', {term: el('filter-input').value});
});
el('filter-input').addEventListener('keydown', function(e) {
  if (e.key === 'Enter') post('filter', {term: e.target.value});
});
el('nav-0').addEventListener('click', function() { post('switch_screen', {index: 0}); });
el('nav-1').addEventListener('click', function() { post('switch_screen', {index: 1}); });
el('theme-btn').addEventListener('click', function() { post('toggle_theme', {}); });

post('ui_ready', {});
"##;

// ─── Main entry point ───

pub fn run() {
    let app = App::new().expect("Failed to initialize Colorbrowser");
    let window_metrics = app.settings_engine.get_settings().window.clone();
    let state = Arc::new(Mutex::new(app));

    {
        let mut s = state.lock().unwrap();
        s.startup();
    }

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Colors Browser")
        .with_inner_size(tao::dpi::LogicalSize::new(
            window_metrics.width as f64,
            window_metrics.height as f64,
        ))
        .with_min_inner_size(tao::dpi::LogicalSize::new(
            window_metrics.min_width as f64,
            window_metrics.min_height as f64,
        ))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    // The IPC handler is an `Fn` closure, so the shell lives behind its own
    // lock next to the app state.
    let ipc_shell = Mutex::new(WebShell::new(proxy.clone()));

    let builder = WebViewBuilder::new()
        .with_custom_protocol("cb".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(page_html().into_bytes().into())
                .unwrap()
        })
        .with_url("cb://localhost/")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let mut s = ipc_state.lock().unwrap();
            let mut shell = ipc_shell.lock().unwrap();
            handle_ipc(&mut s, &mut shell, body);
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                let _ = webview.evaluate_script(&js);
            }

            _ => {}
        }
    });
}
