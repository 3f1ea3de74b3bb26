use models::Result;
use tokio::net::UdpSocket;

pub const OVERLAY_ADDR: &str = "127.0.0.1:42069";

pub async fn send_to_overlay(data: &str) -> Result<()> {
    send_datagram(data, OVERLAY_ADDR).await
}

// One datagram per notification, assumed to fit unfragmented; the socket
// lives for exactly one send.
async fn send_datagram(data: &str, addr: &str) -> Result<()> {
    let socket = UdpSocket::bind("127.0.0.1:0").await?;
    socket.send_to(data.as_bytes(), addr).await?;

    Ok(())
}
