#![cfg(feature = "serve")]

use std::io::{Cursor, Read};
use std::net::SocketAddr;

use augzip::UploadConfig;
use augzip::server::router;
use image::{ImageFormat, Rgb, RgbImage};
use zip::ZipArchive;

const BOUNDARY: &str = "augzip-test-boundary";

async fn spawn_server(config: UploadConfig) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(config)).await.unwrap();
    });
    addr
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 90]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

/// multipart/form-data body with one part per (field, filename, bytes).
fn multipart_body(parts: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (field, filename, bytes) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

async fn post_upload(addr: SocketAddr, body: Vec<u8>) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("http://{}/upload", addr))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(body)
        .send()
        .await
        .unwrap()
}

fn test_config(dest: &std::path::Path) -> UploadConfig {
    UploadConfig {
        upload_dest: dest.to_path_buf(),
        ..UploadConfig::default()
    }
}

#[tokio::test]
async fn index_serves_the_upload_form() {
    let dest = tempfile::tempdir().unwrap();
    let addr = spawn_server(test_config(dest.path())).await;
    let page = reqwest::get(format!("http://{}/", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains(r#"action="/upload""#));
    assert!(page.contains(r#"name="photos""#));
}

#[tokio::test]
async fn upload_returns_zip_attachment() {
    let dest = tempfile::tempdir().unwrap();
    let addr = spawn_server(test_config(dest.path())).await;
    let (a, b) = (png(24, 16), png(10, 10));
    let body = multipart_body(&[
        ("photos", "a.png", &a[..]),
        ("ignored", "x.png", &b"not read"[..]),
        ("photos", "b.png", &b[..]),
    ]);

    let response = post_upload(addr, body).await;
    assert_eq!(response.status().as_u16(), 200);
    let headers = response.headers();
    assert_eq!(headers["content-type"], "application/zip");
    assert_eq!(
        headers["content-disposition"],
        "attachment; filename=\"augmented_images.zip\""
    );

    let bytes = response.bytes().await.unwrap().to_vec();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 14);
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        assert_eq!(entry.name(), format!("augmented_{}.jpg", i));
        let mut jpeg = Vec::new();
        entry.read_to_end(&mut jpeg).unwrap();
        let img = image::load_from_memory(&jpeg).unwrap();
        let expected = if i < 7 { (24, 16) } else { (10, 10) };
        assert_eq!((img.width(), img.height()), expected);
    }
    assert_eq!(std::fs::read_dir(dest.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn disallowed_upload_is_a_bad_request() {
    let dest = tempfile::tempdir().unwrap();
    let addr = spawn_server(test_config(dest.path())).await;
    let body = multipart_body(&[("photos", "notes.txt", &b"hello"[..])]);
    let response = post_upload(addr, body).await;
    assert_eq!(response.status().as_u16(), 400);
}
