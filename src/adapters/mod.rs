pub mod rmcp_server;
pub mod tool_handler;

#[cfg(test)]
mod tool_handler_test;
