//! End-to-end checks of the batch runner over real files and sockets.
