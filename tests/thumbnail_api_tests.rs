//! End-to-end tests for the thumbnail route.
//!
//! Source images are served from an in-process stub origin so no
//! external network is involved.

use actix_web::{test, web, App};
use image::{DynamicImage, GenericImageView, ImageOutputFormat, Rgba, RgbaImage};
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use thumbnail_service::handlers;
use thumbnail_service::services::{ImageFetcher, ThumbnailProcessor};

/// Serve a single canned HTTP response and return the origin base URL
fn spawn_stub_origin(status_line: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub origin");
    let addr = listener.local_addr().expect("stub origin addr");

    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);

            let header = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
        }
    });

    format!("http://{addr}")
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([200, 100, 50, 255]),
    ));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
        .expect("encode fixture");
    buf
}

macro_rules! init_app {
    ($target_width:expr) => {{
        let fetcher = ImageFetcher::new(Duration::from_secs(5)).expect("fetcher");
        let processor = Arc::new(ThumbnailProcessor::new($target_width));
        test::init_service(
            App::new()
                .app_data(web::Data::new(fetcher))
                .app_data(web::Data::new(processor))
                .route("/", web::get().to(handlers::thumbnail_get))
                .route("/", web::post().to(handlers::thumbnail_post)),
        )
        .await
    }};
}

async fn error_code<B>(response: actix_web::dev::ServiceResponse<B>) -> (u16, String)
where
    B: actix_web::body::MessageBody,
    B::Error: std::fmt::Debug,
{
    let status = response.status().as_u16();
    let body: serde_json::Value = test::read_body_json(response).await;
    let code = body["code"].as_str().unwrap_or_default().to_string();
    (status, code)
}

#[actix_web::test]
async fn empty_img_url_returns_informational_message() {
    let app = init_app!(100);

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("imgURL", "")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("executed successfully"));
}

#[actix_web::test]
async fn missing_img_url_is_treated_as_empty() {
    let app = init_app!(100);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn unsupported_extension_is_rejected_before_fetching() {
    let app = init_app!(100);

    // No stub origin exists for this URL; resolution must fail first
    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("imgURL", "https://example.com/cat.bmp")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    let (status, code) = error_code(resp).await;
    assert_eq!(status, 400);
    assert_eq!(code, "UNSUPPORTED_FORMAT");
}

#[actix_web::test]
async fn invalid_url_is_a_bad_request() {
    let app = init_app!(100);

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("imgURL", "not a url.png")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    let (status, code) = error_code(resp).await;
    assert_eq!(status, 400);
    assert_eq!(code, "INVALID_REQUEST");
}

#[actix_web::test]
async fn png_source_produces_scaled_png_thumbnail() {
    let app = init_app!(100);
    let origin = spawn_stub_origin("200 OK", png_bytes(400, 200));

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("imgURL", format!("{origin}/cat.png"))])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "image/png"
    );

    let body = test::read_body(resp).await;
    let thumbnail = image::load_from_memory(&body).expect("valid thumbnail");
    assert_eq!(thumbnail.dimensions(), (100, 50));
}

#[actix_web::test]
async fn jpeg_extension_reports_jpeg_content_type() {
    let app = init_app!(50);
    let origin = spawn_stub_origin("200 OK", png_bytes(200, 100));

    let req = test::TestRequest::get()
        .uri(&format!("/?imgURL={origin}/photos/cat.JPEG"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "image/jpeg"
    );

    let body = test::read_body(resp).await;
    assert_eq!(
        image::guess_format(&body).unwrap(),
        image::ImageFormat::Jpeg
    );
}

#[actix_web::test]
async fn upstream_404_is_a_fetch_failure() {
    let app = init_app!(100);
    let origin = spawn_stub_origin("404 Not Found", b"gone".to_vec());

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("imgURL", format!("{origin}/cat.png"))])
        .to_request();
    let resp = test::call_service(&app, req).await;

    let (status, code) = error_code(resp).await;
    assert_eq!(status, 400);
    assert_eq!(code, "FETCH_FAILED");
}

#[actix_web::test]
async fn corrupt_bytes_are_a_decode_failure() {
    let app = init_app!(100);
    let origin = spawn_stub_origin("200 OK", b"these are not pixels".to_vec());

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("imgURL", format!("{origin}/cat.jpg"))])
        .to_request();
    let resp = test::call_service(&app, req).await;

    let (status, code) = error_code(resp).await;
    assert_eq!(status, 400);
    assert_eq!(code, "DECODE_FAILED");
}

#[actix_web::test]
async fn target_width_wider_than_source_is_a_configuration_error() {
    let app = init_app!(800);
    let origin = spawn_stub_origin("200 OK", png_bytes(400, 200));

    let req = test::TestRequest::post()
        .uri("/")
        .set_form([("imgURL", format!("{origin}/cat.png"))])
        .to_request();
    let resp = test::call_service(&app, req).await;

    let (status, code) = error_code(resp).await;
    assert_eq!(status, 500);
    assert_eq!(code, "INVALID_TARGET_WIDTH");
}
