use util::{Number, Vector3D};

/// Geometry engine commands, by their register offset from the IO base.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[repr(u16)]
pub enum GfxCommand {
    #[default]
    Nop = 0x400,
    MatrixPush = 0x444,
    MatrixPop = 0x448,
    MatrixMult4x3 = 0x464,
    Normal = 0x484,
    Vertex16 = 0x48c,
    DiffuseAmbient = 0x4c0,
    SpecularEmission = 0x4c4,
    Begin = 0x500,
}

impl GfxCommand {
    pub const fn offset(self) -> u16 {
        self as u16
    }

    /// Command id as it appears in a packed command word.
    pub const fn id(self) -> u8 {
        ((self.offset() - 0x400) >> 2) as u8
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum Primitive {
    Triangles = 0,
    Quads = 1,
    TriangleStrip = 2,
    QuadStrip = 3,
}

/// Four command ids in one word, first command in the low byte.
pub const fn fifo_pack(commands: [GfxCommand; 4]) -> u32 {
    commands[0].id() as u32
        | (commands[1].id() as u32) << 8
        | (commands[2].id() as u32) << 16
        | (commands[3].id() as u32) << 24
}

/// Two 4.12 coordinates in one word. Values outside `[-8, 8)` wrap.
pub fn vertex_pack(low: Number, high: Number) -> u32 {
    u32::from(low.to_raw() as u16) | u32::from(high.to_raw() as u16) << 16
}

/// Three 1.9 components in 10-bit fields, clamped to `[-1, 1)`.
pub fn normal_pack(normal: Vector3D<Number>) -> u32 {
    let field = |value: Number| (value.to_raw().clamp(-4096, 4095) >> 3) as u32 & 0x3ff;
    field(normal.x) | field(normal.y) << 10 | field(normal.z) << 20
}

/// 15-bit colour from 5-bit channels.
pub const fn rgb15(red: u8, green: u8, blue: u8) -> u16 {
    (red as u16 & 0x1f) | (green as u16 & 0x1f) << 5 | (blue as u16 & 0x1f) << 10
}

/// Two colours and a flag, as taken by both material commands.
pub const fn material_pack(low: u16, high: u16, flag: bool) -> u32 {
    (low as u32 & 0xffff) | (high as u32) << 16 | (flag as u32) << 15
}
