pub use Layout as Base;

markup::define! {
    Layout<Header: markup::Render, Content: markup::Render>(
        header: Header,
        content: Content
    ) {
        @markup::doctype()
        html["lang" = "en"] {
            head {
                meta["charset" = "UTF-8"];
                meta["name" = "color-scheme", "content" = "dark light"];
                meta["name" = "viewport", "content" = "width=device-width, initial-scale=1"];
                meta["name" = "robots", "content" = "noindex, nofollow"];
                title { "Clawgate control UI" }
                link["rel" = "stylesheet", "href" = "./main.css"];
            }
            body {
                header {
                    h1 {
                        "Clawgate control UI"
                    }
                    @header
                }
                main { @content }
                footer {
                    p {
                        "Metadata blocks, envelope headers and message id hints are removed server side. "
                        "Nothing you submit is stored."
                    }
                }
            }
        }
    }
}
