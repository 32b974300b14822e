// One-time server bootstrap shared by the integration tests in a binary.
use std::sync::{mpsc, OnceLock};

static SERVER_URL: OnceLock<String> = OnceLock::new();

// Start the server on first use and return its base URL.
pub fn ensure_server() -> &'static str {
    SERVER_URL.get_or_init(|| {
        let (addr_tx, addr_rx) = mpsc::channel();
        // A dedicated OS thread keeps the server alive across `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                // The socket is already listening here, so connections queue until serve starts.
                let addr = listener.local_addr().expect("get local addr");
                addr_tx.send(addr).expect("publish server address");
                customer_server::run(listener).await.expect("server failed");
            });
        });

        let addr = addr_rx.recv().expect("server thread exited before binding");
        format!("http://{addr}")
    })
}
