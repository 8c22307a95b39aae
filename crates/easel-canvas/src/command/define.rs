//! The `draw_commands!` macro: single source of truth for draw commands.
//!
//! One invocation generates:
//! 1. `DrawCommand`, the tagged command enum
//! 2. `CommandKind`, a field-less discriminant with `ALL` / `COUNT`
//! 3. `SCHEMA_TABLE`, one `ToolSchema` per variant in declaration order
//! 4. tool-name lookup in both directions
//! 5. per-variant field decoding and wire encoding, applying the
//!    internal-name to wire-name alias of every field

macro_rules! draw_commands {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident = $tool:literal, $desc:literal {
                $( $field:ident : $ty:ty = $wire:literal, $fdesc:literal; )+
            }
        )+
    ) => {
        /// A single drawing instruction.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum DrawCommand {
            $(
                $(#[$meta])*
                $variant { $( $field: $ty, )+ },
            )+
        }

        /// Discriminant of a [`DrawCommand`], one per tool.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CommandKind {
            $( $variant, )+
        }

        impl CommandKind {
            pub const ALL: [CommandKind; [$( $tool ),+].len()] = [ $( CommandKind::$variant, )+ ];
            pub const COUNT: usize = Self::ALL.len();

            pub const fn tool_name(self) -> &'static str {
                match self {
                    $( CommandKind::$variant => $tool, )+
                }
            }

            pub fn from_tool_name(name: &str) -> Option<Self> {
                match name {
                    $( $tool => Some(CommandKind::$variant), )+
                    _ => None,
                }
            }

            pub fn schema(self) -> &'static $crate::schema::ToolSchema {
                &$crate::schema::TOOL_SCHEMAS[self as usize]
            }
        }

        pub(crate) const SCHEMA_TABLE: [$crate::schema::ToolSchema; CommandKind::COUNT] = [
            $(
                $crate::schema::ToolSchema {
                    name: $tool,
                    description: $desc,
                    properties: &[
                        $(
                            $crate::schema::PropertySchema {
                                name: $wire,
                                kind: <$ty as WireField>::KIND,
                                description: $fdesc,
                            },
                        )+
                    ],
                },
            )+
        ];

        impl DrawCommand {
            pub const fn kind(&self) -> CommandKind {
                match self {
                    $( DrawCommand::$variant { .. } => CommandKind::$variant, )+
                }
            }

            pub const fn tool_name(&self) -> &'static str {
                self.kind().tool_name()
            }

            /// Build a command from an already shape-checked parameter object.
            fn from_params(
                kind: CommandKind,
                params: &serde_json::Map<String, serde_json::Value>,
                pool: &mut StringPool,
            ) -> Result<Self, DecodeError> {
                match kind {
                    $(
                        CommandKind::$variant => Ok(DrawCommand::$variant {
                            $(
                                $field: <$ty as WireField>::from_wire(
                                    params.get($wire).unwrap_or(&serde_json::Value::Null),
                                    pool,
                                )
                                .map_err(|e| e.into_decode_error($tool, $wire, <$ty as WireField>::KIND))?,
                            )+
                        }),
                    )+
                }
            }

            /// Append `,"name":value` for every field, in schema order.
            fn write_params(&self, pool: &StringPool, out: &mut String) {
                match self {
                    $(
                        DrawCommand::$variant { $( $field, )+ } => {
                            $(
                                write_key(out, $wire);
                                $field.write_wire(pool, out);
                            )+
                        }
                    )+
                }
            }
        }
    };
}
