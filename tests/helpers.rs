// Shared test helpers for spawning the API and building listing pages.
//
// This module is included by several test files via `mod helpers;`.

use std::net::SocketAddr;

use listing_import::{router, AppState, Config};

/// A realistic listing page with Open Graph, JSON-LD and body markup.
#[allow(dead_code)] // Used by other test files
pub const LISTING_HTML: &str = r#"<!doctype html>
<html>
<head>
  <title>3 Bed House for sale in Durbanville</title>
  <meta property="og:title" content="3 Bed House in Durbanville">
  <meta property="og:description" content="Family home with a double garage, solar panels and a large garden.">
  <meta property="og:image" content="//cdn.listings.test/p/1/main.jpg">
  <script type="application/ld+json">
  {
    "@context": "https://schema.org",
    "@type": "RealEstateListing",
    "address": {"streetAddress": "8 Oak Ave", "addressLocality": "Durbanville", "addressRegion": "Western Cape"},
    "offers": {"@type": "Offer", "price": 2450000, "priceCurrency": "ZAR"},
    "numberOfBedrooms": 3,
    "numberOfBathroomsTotal": 2,
    "floorSize": {"@type": "QuantitativeValue", "value": 210, "unitCode": "MTK"}
  }
  </script>
</head>
<body>
  <header><img src="/assets/agency-logo.png"></header>
  <img src="/p/1/kitchen.jpg">
  <img data-lazy="/p/1/garden.webp">
  <iframe src="https://player.vimeo.com/video/76979871"></iframe>
</body>
</html>"#;

/// Starts the API on an ephemeral port and returns its address.
#[allow(dead_code)]
pub async fn spawn_app(config: Config) -> (SocketAddr, AppState) {
    let state = AppState::new(config).expect("Failed to build app state");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    let app = router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });
    (addr, state)
}
