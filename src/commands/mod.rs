pub mod promote;
