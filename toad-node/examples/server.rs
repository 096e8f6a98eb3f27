use std::net::UdpSocket;

use toad_node::codec::MsgCodec;
use toad_node::config::Config;
use toad_node::sensor::{Actuator, BaroTemperature, Centidegrees, Humidity, Pressure, Sensors};
use toad_node::server::Node;

/// Fake board whose readings drift a little on every read
#[derive(Debug, Default)]
struct Board {
  reads: i32,
}

impl Board {
  fn tick(&mut self) -> i32 {
    self.reads = self.reads.wrapping_add(1);
    self.reads % 16
  }
}

impl Sensors for Board {
  fn read_temperature(&mut self) -> Centidegrees {
    Centidegrees(2100 + self.tick())
  }

  fn read_humidity(&mut self) -> Humidity {
    Humidity(45 + self.tick() / 4)
  }

  fn read_pressure(&mut self) -> Pressure {
    Pressure(405_000 + self.tick() as u32)
  }

  fn read_pressure_temperature(&mut self) -> BaroTemperature {
    BaroTemperature(336 + self.tick() as i16)
  }
}

#[derive(Debug, Default)]
struct Led;

impl Actuator for Led {
  fn set_actuator(&mut self, on: bool) {
    log::info!("LED {}", if on { "on" } else { "off" });
  }
}

fn main() {
  simple_logger::init_with_level(log::Level::Debug).unwrap();

  let addr = std::env::args().nth(1)
                             .unwrap_or_else(|| "0.0.0.0:5683".to_string());
  let sock = UdpSocket::bind(&addr).unwrap();
  log::info!("listening on {}", addr);

  let mut node = Node::new(MsgCodec, Board::default(), Led, Config::default());
  log::info!("advertising {}", node.discovery().as_str());

  let mut dgram = [0u8; 1152];
  let mut out = [0u8; 1152];

  loop {
    let (n, from) = match sock.recv_from(&mut dgram) {
      | Ok(ok) => ok,
      | Err(e) => {
        log::error!("recv failed: {}", e);
        continue;
      },
    };

    match node.handle(&dgram[..n], &mut out) {
      | Ok(len) => {
        if let Err(e) = sock.send_to(&out[..len], from) {
          log::error!("send to {} failed: {}", from, e);
        }
      },
      | Err(e) => log::warn!("no response for {}: {:?}", from, e),
    }
  }
}
