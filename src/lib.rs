pub mod shared {
    pub mod infrastructure {
        pub mod console;
        pub mod record_store;
    }
}

pub mod modules {
    pub mod scheduling {
        pub mod core {
            pub mod clock;
            pub mod records;
            pub mod schedule;
            pub mod validate_talk;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod create_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod repl;
                }
            }
            pub mod create_speaker {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod repl;
                }
            }
            pub mod create_talk {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod repl;
                }
            }
            pub mod print_talks {
                pub mod command;
                pub mod handler;
                pub mod presenter;
                pub mod inbound {
                    pub mod repl;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod repl {
                    pub mod arguments;
                    pub mod documentation;
                    pub mod registry;
                    pub mod tokenizer;
                }
            }
        }
    }
}

pub mod shell;
