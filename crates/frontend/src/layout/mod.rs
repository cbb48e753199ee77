pub mod footer;
pub mod header;

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Page frame shared by every route.
///
/// ```text
/// +------------------------------------------+
/// |   Header (contact strip + navigation)    |
/// +------------------------------------------+
/// |               page content               |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
