use util::{Number, Vector3D};

use crate::command::{
    fifo_pack, material_pack, normal_pack, vertex_pack, GfxCommand, Primitive,
};

/// Words written by [`DispWriter::new`] before any command: the packed word,
/// twelve matrix parameters and the parameters of two padding nops.
pub const MIN_BUFFER_LENGTH: usize = 1 + 12 + 2;

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
struct Staged {
    command: GfxCommand,
    params: [u32; 2],
    param_count: u8,
}

impl Staged {
    const NOP: Staged = Staged {
        command: GfxCommand::Nop,
        params: [0, 0],
        param_count: 1,
    };

    fn params(&self) -> &[u32] {
        &self.params[..usize::from(self.param_count)]
    }
}

/// Snapshot taken by [`DispWriter::save`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WriterState {
    pipe: [Staged; 4],
    position: usize,
    pipe_index: usize,
}

/// Writes a display list for the geometry engine's command FIFO.
///
/// Commands are staged four at a time and written out as one packed command
/// word followed by all of their parameters. The list opens by pushing the
/// matrix stack and applying a scale and translation, and [`finish`] pops it
/// again.
///
/// When a pack does not fit, nothing is written and the writer latches
/// [`is_full`]. Later pushes are dropped until the caller hands over a new
/// buffer with [`reseat_buffer`], at which point the staged commands carry on
/// into it. Use [`save`] and [`reset`] around a group of commands that must
/// land together.
///
/// [`finish`]: DispWriter::finish
/// [`is_full`]: DispWriter::is_full
/// [`reseat_buffer`]: DispWriter::reseat_buffer
/// [`save`]: DispWriter::save
/// [`reset`]: DispWriter::reset
pub struct DispWriter<'a> {
    buffer: &'a mut [u32],
    position: usize,
    pipe: [Staged; 4],
    pipe_index: usize,
    full: bool,
}

impl<'a> DispWriter<'a> {
    /// Panics if `buffer` is shorter than [`MIN_BUFFER_LENGTH`].
    pub fn new(buffer: &'a mut [u32], translation: Vector3D<Number>, scale: Vector3D<Number>) -> Self {
        assert!(
            buffer.len() >= MIN_BUFFER_LENGTH,
            "display list buffer needs at least {} words, got {}",
            MIN_BUFFER_LENGTH,
            buffer.len()
        );

        let mut writer = Self {
            buffer,
            position: 0,
            pipe: [Staged::default(); 4],
            pipe_index: 0,
            full: false,
        };
        writer.write_prelude(translation, scale);
        writer
    }

    fn write_prelude(&mut self, translation: Vector3D<Number>, scale: Vector3D<Number>) {
        let raw = |value: Number| value.to_raw() as u32;

        self.append(fifo_pack([
            GfxCommand::MatrixPush,
            GfxCommand::MatrixMult4x3,
            GfxCommand::Nop,
            GfxCommand::Nop,
        ]));
        for word in [
            raw(scale.x), 0, 0,
            0, raw(scale.y), 0,
            0, 0, raw(scale.z),
            raw(translation.x), raw(translation.y), raw(translation.z),
        ] {
            self.append(word);
        }
        self.append(0);
        self.append(0);
    }

    fn append(&mut self, word: u32) {
        self.buffer[self.position] = word;
        self.position += 1;
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn pipe_index(&self) -> usize {
        self.pipe_index
    }

    pub fn write_count(&self) -> usize {
        self.position
    }

    /// The words written so far.
    pub fn written(&self) -> &[u32] {
        &self.buffer[..self.position]
    }

    pub fn save(&self) -> WriterState {
        WriterState {
            pipe: self.pipe,
            position: self.position,
            pipe_index: self.pipe_index,
        }
    }

    /// Rewinds to `state`. Words written since then stay in the buffer until
    /// overwritten, and a latched full state stays latched.
    ///
    /// A state belongs to the buffer it was saved in. Panics if it points
    /// past the end of the current one.
    pub fn reset(&mut self, state: WriterState) {
        assert!(
            state.position <= self.buffer.len(),
            "writer state at word {} does not fit a buffer of {} words",
            state.position,
            self.buffer.len()
        );
        self.pipe = state.pipe;
        self.position = state.position;
        self.pipe_index = state.pipe_index;
    }

    /// Continues into `buffer` and returns the written part of the old one.
    pub fn reseat_buffer(&mut self, buffer: &'a mut [u32]) -> &'a mut [u32] {
        let previous = core::mem::replace(&mut self.buffer, buffer);
        let written = core::mem::replace(&mut self.position, 0);
        self.full = false;
        &mut previous[..written]
    }

    /// Writes the staged commands out as one pack, padding with nops.
    ///
    /// The last command of a pack must take parameters, so a parameterless
    /// command in that slot is replaced by a nop and carried into the next
    /// pack.
    pub fn flush(&mut self) -> &mut Self {
        for staged in &mut self.pipe[self.pipe_index..] {
            *staged = Staged::NOP;
        }
        self.pipe_index = 4;

        let deferred = if self.pipe[3].param_count == 0 {
            Some(core::mem::replace(&mut self.pipe[3], Staged::NOP))
        } else {
            None
        };

        let needed = 1 + self.pipe.iter().map(|staged| staged.params().len()).sum::<usize>();
        if self.buffer.len() - self.position < needed {
            if let Some(deferred) = deferred {
                self.pipe[3] = deferred;
            }
            if !self.full {
                log::debug!("display list full after {} words", self.position);
            }
            self.full = true;
            return self;
        }

        self.append(fifo_pack(self.pipe.map(|staged| staged.command)));
        for index in 0..4 {
            let staged = self.pipe[index];
            for &param in staged.params() {
                self.append(param);
            }
        }

        match deferred {
            Some(deferred) => {
                self.pipe[0] = deferred;
                self.pipe_index = 1;
            }
            None => self.pipe_index = 0,
        }

        self
    }

    /// Stages `command` with up to two parameters, flushing first when the
    /// pipe is full. Dropped when that flush does not fit.
    pub fn push(&mut self, command: GfxCommand, params: &[u32]) -> &mut Self {
        assert!(params.len() <= 2, "{:?} takes at most two parameters", command);

        if self.pipe_index == 4 && self.flush().is_full() {
            return self;
        }

        let mut staged = Staged {
            command,
            params: [0, 0],
            param_count: params.len() as u8,
        };
        staged.params[..params.len()].copy_from_slice(params);
        self.pipe[self.pipe_index] = staged;
        self.pipe_index += 1;
        self
    }

    pub fn nop(&mut self) -> &mut Self {
        self.push(GfxCommand::Nop, &[0])
    }

    pub fn vertex(&mut self, position: Vector3D<Number>) -> &mut Self {
        self.push(
            GfxCommand::Vertex16,
            &[
                vertex_pack(position.x, position.y),
                vertex_pack(position.z, Number::new(0)),
            ],
        )
    }

    pub fn normal(&mut self, normal: Vector3D<Number>) -> &mut Self {
        self.push(GfxCommand::Normal, &[normal_pack(normal)])
    }

    /// With `set_vertex_color` the diffuse colour also becomes the vertex
    /// colour.
    pub fn diffuse_ambient(&mut self, diffuse: u16, ambient: u16, set_vertex_color: bool) -> &mut Self {
        self.push(
            GfxCommand::DiffuseAmbient,
            &[material_pack(diffuse, ambient, set_vertex_color)],
        )
    }

    pub fn specular_emission(&mut self, specular: u16, emission: u16, shininess_table: bool) -> &mut Self {
        self.push(
            GfxCommand::SpecularEmission,
            &[material_pack(specular, emission, shininess_table)],
        )
    }

    /// A whole quad or nothing of it.
    pub fn quad(&mut self, corners: [Vector3D<Number>; 4]) -> &mut Self {
        let state = self.save();
        self.push(GfxCommand::Begin, &[Primitive::Quads as u32]);
        for corner in corners {
            self.vertex(corner);
        }
        if self.full {
            self.reset(state);
        }
        self
    }

    /// Pops the prelude's matrix and flushes.
    pub fn finish(&mut self) -> &mut Self {
        self.push(GfxCommand::MatrixPop, &[1]);
        self.flush()
    }
}
