use crate::response::Response;
use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// The client side of a session as seen by command handlers. Most commands
/// only produce a response, but SIZE needs to answer mid-command and then
/// pull the payload line itself.
#[async_trait]
pub trait ControlChannel: Send {
    async fn send(&mut self, response: &Response) -> io::Result<()>;

    /// Next line from the client without its line ending, or `None` once the
    /// peer has closed the connection.
    async fn read_line(&mut self) -> io::Result<Option<String>>;

    async fn shutdown(&mut self) -> io::Result<()>;
}

/// Newline-delimited channel over any buffered reader and writer pair.
pub struct LineChannel<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> LineChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

#[async_trait]
impl<R, W> ControlChannel for LineChannel<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn send(&mut self, response: &Response) -> io::Result<()> {
        self.writer.write_all(&response.encode()).await?;
        self.writer.flush().await
    }

    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// a garbled line still gets a protocol answer.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = Vec::new();
        let n = self.reader.read_until(b'\n', &mut buffer).await?;
        if n == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buffer);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn shutdown(&mut self) -> io::Result<()> {
        self.writer.shutdown().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, BufReader};

    #[tokio::test]
    async fn test_read_line_strips_line_endings() {
        let input: &[u8] = b"user user1\r\nlist f\nlast";
        let mut channel = LineChannel::new(BufReader::new(input), Vec::new());

        assert_eq!(channel.read_line().await.unwrap().as_deref(), Some("user user1"));
        assert_eq!(channel.read_line().await.unwrap().as_deref(), Some("list f"));
        assert_eq!(channel.read_line().await.unwrap().as_deref(), Some("last"));
        assert_eq!(channel.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_read_line_replaces_invalid_utf8() {
        let input: &[u8] = b"user user1\xff\r\nstor new caf\xc3\xa9.txt\n";
        let mut channel = LineChannel::new(BufReader::new(input), Vec::new());

        assert_eq!(
            channel.read_line().await.unwrap().as_deref(),
            Some("user user1\u{FFFD}")
        );
        assert_eq!(
            channel.read_line().await.unwrap().as_deref(),
            Some("stor new caf\u{e9}.txt")
        );
        assert_eq!(channel.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_send_frames_response() {
        let (client, server) = tokio::io::duplex(64);
        let (_server_read, server_write) = tokio::io::split(server);
        let mut channel = LineChannel::new(BufReader::new(tokio::io::empty()), server_write);

        channel.send(&Response::success("Closing connection")).await.unwrap();
        channel.shutdown().await.unwrap();

        let mut received = Vec::new();
        let (mut client_read, _client_write) = tokio::io::split(client);
        client_read.read_to_end(&mut received).await.unwrap();
        assert_eq!(received, b"+Closing connection\0".to_vec());
    }
}
