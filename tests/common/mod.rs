/*
 * GreenField Estimator, an AI-assisted effort estimation form with GUI
 * Copyright (C) 2025 Athaariq A. Ramadhani <foss@athaariq.my.id>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

#![allow(dead_code)]

use std::path::PathBuf;
use tokio::{
	io::{AsyncReadExt, AsyncWriteExt},
	net::TcpListener,
	sync::oneshot,
};

use greenfield_estimator_lib::EstimatorConfig;

/// What the fake service saw.
#[derive(Debug)]
pub struct CapturedRequest {
	pub method: String,
	pub path: String,
	pub body: Vec<u8>,
}

impl CapturedRequest {
	pub fn json(&self) -> serde_json::Value {
		serde_json::from_slice(&self.body).expect("request body should be JSON")
	}
}

/// Serve exactly one HTTP response on a random local port.
///
/// Returns the base address and a receiver for the captured request.
pub async fn serve_once(
	status: u16,
	content_type: &'static str,
	body: Vec<u8>,
) -> (String, oneshot::Receiver<CapturedRequest>) {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let address = listener.local_addr().unwrap();
	let (tx, rx) = oneshot::channel();

	tokio::spawn(async move {
		let (mut socket, _) = listener.accept().await.unwrap();
		let request = read_request(&mut socket).await;

		let head = format!(
			"HTTP/1.1 {} {}\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
			status,
			reason(status),
			content_type,
			body.len()
		);
		socket.write_all(head.as_bytes()).await.unwrap();
		socket.write_all(&body).await.unwrap();
		socket.shutdown().await.ok();

		let _ = tx.send(request);
	});

	(format!("http://{}", address), rx)
}

pub async fn serve_json(status: u16, body: &str) -> (String, oneshot::Receiver<CapturedRequest>) {
	serve_once(status, "application/json", body.as_bytes().to_vec()).await
}

/// An address nobody listens on.
pub async fn closed_endpoint() -> String {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let address = listener.local_addr().unwrap();
	drop(listener);
	format!("http://{}", address)
}

pub fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.join("tests")
		.join("fixtures")
		.join(name)
}

pub fn config_for(endpoint: &str) -> EstimatorConfig {
	EstimatorConfig {
		endpoint: endpoint.to_string(),
		benchmark_path: fixture("book3.xlsx"),
		request_timeout_secs: Some(5),
		..EstimatorConfig::local()
	}
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> CapturedRequest {
	let mut buffer = Vec::new();
	let mut chunk = [0u8; 4096];

	let header_end = loop {
		let read = socket.read(&mut chunk).await.unwrap();
		assert!(read > 0, "client closed before sending headers");
		buffer.extend_from_slice(&chunk[..read]);

		if let Some(found) = find(&buffer, b"\r\n\r\n") {
			break found + 4;
		}
	};

	let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
	let mut lines = head.lines();
	let mut request_line = lines.next().unwrap_or_default().split_whitespace();
	let method = request_line.next().unwrap_or_default().to_string();
	let path = request_line.next().unwrap_or_default().to_string();

	let content_length = lines
		.filter_map(|line| line.split_once(':'))
		.find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
		.and_then(|(_, value)| value.trim().parse::<usize>().ok())
		.unwrap_or(0);

	while buffer.len() < header_end + content_length {
		let read = socket.read(&mut chunk).await.unwrap();
		if read == 0 {
			break;
		}
		buffer.extend_from_slice(&chunk[..read]);
	}

	CapturedRequest {
		method,
		path,
		body: buffer[header_end..].to_vec(),
	}
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}

fn reason(status: u16) -> &'static str {
	match status {
		200 => "OK",
		404 => "Not Found",
		500 => "Internal Server Error",
		503 => "Service Unavailable",
		_ => "Unknown",
	}
}
