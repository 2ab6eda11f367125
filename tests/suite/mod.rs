mod determinism;
mod dispatch;
mod organic;
mod packet;
